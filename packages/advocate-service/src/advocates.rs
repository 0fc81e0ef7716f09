use advocate_domain::{PageResult, QueryParameters, RawQuery};

use crate::{AdvocateService, ServiceResult};

impl AdvocateService {
	pub async fn advocates(&self, raw: &RawQuery) -> ServiceResult<PageResult> {
		let params = QueryParameters::from_raw(raw, self.limits, self.search_mode);
		let records = self.source.snapshot().await?;
		let result = advocate_domain::query(&records, &params);

		tracing::debug!(
			search = %params.search,
			page = params.page,
			page_size = params.page_size,
			total_count = result.pagination.total_count,
			"Advocate query served."
		);

		Ok(result)
	}
}
