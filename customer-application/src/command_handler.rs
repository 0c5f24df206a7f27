use crate::{command::Command, error::AppError};
use async_trait::async_trait;

#[async_trait]
pub trait CommandHandler<C>: Send + Sync
where
    C: Command,
{
    async fn handle(&self, cmd: C) -> Result<C::Output, AppError>;
}
