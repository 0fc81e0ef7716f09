use std::sync::Arc;

use advocate_service::AdvocateService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<AdvocateService>,
}
impl AppState {
	pub async fn new(config: &advocate_config::Config) -> color_eyre::Result<Self> {
		let service = AdvocateService::from_config(config).await?;

		Ok(Self::from_service(service))
	}

	pub fn from_service(service: AdvocateService) -> Self {
		Self { service: Arc::new(service) }
	}
}
