use async_trait::async_trait;

use crate::portfolio::application::domain::entities::PortfolioView;
use crate::shared::store::StoreError;

#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Result<PortfolioView, StoreError>;
}
