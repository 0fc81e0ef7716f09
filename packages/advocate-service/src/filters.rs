use advocate_domain::FilterOptions;

use crate::{AdvocateService, ServiceResult};

impl AdvocateService {
	pub async fn filters(&self) -> ServiceResult<FilterOptions> {
		let records = self.source.snapshot().await?;

		Ok(advocate_domain::list_filter_options(&records))
	}
}
