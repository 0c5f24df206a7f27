use serde::{Deserialize, Serialize};

/// 客户实体
///
/// - `id` 在存储内唯一；`0` 为哨兵值，表示“尚未分配，由仓储在写入时分配”；
/// - 姓名与营收不做非空/非负校验；
/// - 对外序列化为 camelCase（`firstName` / `lastName` / `revenue`），
///   反序列化时缺失的 `id` 视为未分配。
///
/// # 示例
///
/// ```
/// use customer_domain::Customer;
///
/// let c = Customer::unassigned("Ada".into(), "Lovelace".into(), 50_000.0);
/// assert!(c.is_unassigned());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// 唯一标识（`0` 为未分配哨兵值）
    #[serde(default)]
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub revenue: f64,
}

impl Customer {
    /// 未分配标识的哨兵值
    pub const UNASSIGNED_ID: u32 = 0;

    /// 创建尚未分配 id 的客户
    pub fn unassigned(first_name: String, last_name: String, revenue: f64) -> Self {
        Self {
            id: Self::UNASSIGNED_ID,
            first_name,
            last_name,
            revenue,
        }
    }

    /// 是否尚未分配 id
    pub fn is_unassigned(&self) -> bool {
        self.id == Self::UNASSIGNED_ID
    }
}
