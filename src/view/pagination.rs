//! Page indicators for paginated listings.

/// One element of a pagination bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaginationIndicator {
	/// Link to another page.
	Page(u32),
	/// The page being shown.
	CurrPage(u32),
	/// Gap between non-adjacent page links.
	Ellipsis,
	/// Link to the following page.
	NextButton(u32),
	/// Link to the preceding page.
	BackButton(u32),
}

/// Builds the indicators for `curr_page` out of `page_count`, showing at most `max_pages`
/// numbered pages around the current one plus the first and last page.
pub fn create_pagination_indicators(
	curr_page: u32,
	page_count: u32,
	max_pages: u32,
) -> Vec<PaginationIndicator> {
	let page_count = page_count.max(1);
	let curr_page = curr_page.clamp(1, page_count);
	let max_pages = max_pages.clamp(1, page_count);
	let start = curr_page.saturating_sub(max_pages / 2).clamp(1, page_count - max_pages + 1);
	let end = start + max_pages - 1;
	let mut indicators = Vec::new();

	if curr_page > 1 {
		indicators.push(PaginationIndicator::BackButton(curr_page - 1));
	}
	if start > 1 {
		indicators.push(PaginationIndicator::Page(1));
	}
	if start > 2 {
		indicators.push(PaginationIndicator::Ellipsis);
	}

	indicators.extend((start..=end).map(|page| {
		if page == curr_page {
			PaginationIndicator::CurrPage(page)
		} else {
			PaginationIndicator::Page(page)
		}
	}));

	if end + 1 < page_count {
		indicators.push(PaginationIndicator::Ellipsis);
	}
	if end < page_count {
		indicators.push(PaginationIndicator::Page(page_count));
	}
	if curr_page < page_count {
		indicators.push(PaginationIndicator::NextButton(curr_page + 1));
	}

	indicators
}
