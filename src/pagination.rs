//! This modules defines the common functionality for paging data.

use maud::{Markup, html};

/// The number of rows shown on one page of a paginated table.
pub const ITEMS_PER_PAGE: u64 = 6;

/// Up to this many pages are listed without collapsing any into an ellipsis.
const MAX_UNCOLLAPSED_PAGES: u64 = 7;

/// One entry in the page window shown by a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageWindowItem {
    /// A link to a page number.
    Page(u64),
    /// A gap standing in for one or more hidden pages.
    Ellipsis,
}

/// Compute the compact sequence of page numbers to display for `curr_page`
/// out of `page_count` pages.
///
/// Seven or fewer pages are listed in full. Otherwise the first and last
/// pages stay visible and runs of hidden pages collapse into
/// [PageWindowItem::Ellipsis].
pub fn generate_pagination(curr_page: u64, page_count: u64) -> Vec<PageWindowItem> {
    use PageWindowItem::{Ellipsis, Page};

    if page_count <= MAX_UNCOLLAPSED_PAGES {
        return (1..=page_count).map(Page).collect();
    }

    if curr_page <= 3 {
        return vec![
            Page(1),
            Page(2),
            Page(3),
            Ellipsis,
            Page(page_count - 1),
            Page(page_count),
        ];
    }

    if curr_page >= page_count - 2 {
        return vec![
            Page(1),
            Page(2),
            Ellipsis,
            Page(page_count - 2),
            Page(page_count - 1),
            Page(page_count),
        ];
    }

    vec![
        Page(1),
        Ellipsis,
        Page(curr_page - 1),
        Page(curr_page),
        Page(curr_page + 1),
        Ellipsis,
        Page(page_count),
    ]
}

/// Render a pagination control.
///
/// `page_url` maps a page number to the URL that displays that page.
pub fn pagination_view(
    curr_page: u64,
    page_count: u64,
    page_url: impl Fn(u64) -> String,
) -> Markup {
    if page_count == 0 {
        return html! {};
    }

    let arrow_style = "flex h-10 w-10 items-center justify-center rounded-md border \
        border-gray-300 dark:border-gray-600";
    let page_style = "flex h-10 w-10 items-center justify-center text-sm border \
        border-gray-300 dark:border-gray-600";
    let curr_page_style = "flex h-10 w-10 items-center justify-center text-sm border \
        z-10 bg-blue-600 border-blue-600 text-white";

    html! {
        nav class="pagination mt-5 flex w-full justify-center" aria-label="Pagination"
        {
            ul class="inline-flex items-center gap-2"
            {
                li
                {
                    @if curr_page > 1 {
                        a href=(page_url(curr_page - 1)) class=(arrow_style) aria-label="Previous page" { "←" }
                    } @else {
                        span class={ (arrow_style) " pointer-events-none text-gray-300" } { "←" }
                    }
                }

                @for item in generate_pagination(curr_page, page_count) {
                    li
                    {
                        @match item {
                            PageWindowItem::Page(page) if page == curr_page => {
                                span aria-current="page" class=(curr_page_style) { (page) }
                            }
                            PageWindowItem::Page(page) => {
                                a href=(page_url(page)) class=(page_style) { (page) }
                            }
                            PageWindowItem::Ellipsis => {
                                span class={ (page_style) " text-gray-300" } { "..." }
                            }
                        }
                    }
                }

                li
                {
                    @if curr_page < page_count {
                        a href=(page_url(curr_page + 1)) class=(arrow_style) aria-label="Next page" { "→" }
                    } @else {
                        span class={ (arrow_style) " pointer-events-none text-gray-300" } { "→" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::pagination::{PageWindowItem, generate_pagination};

    use PageWindowItem::{Ellipsis, Page};

    #[test]
    fn shows_all_pages() {
        let got = generate_pagination(1, 5);

        assert_eq!(got, [Page(1), Page(2), Page(3), Page(4), Page(5)]);
    }

    #[test]
    fn never_collapses_seven_or_fewer_pages() {
        for page_count in 1..=7 {
            for curr_page in 1..=page_count {
                let got = generate_pagination(curr_page, page_count);
                let want: Vec<_> = (1..=page_count).map(Page).collect();

                assert_eq!(want, got, "page {curr_page} of {page_count}");
            }
        }
    }

    #[test]
    fn shows_page_subset_on_left() {
        let got = generate_pagination(2, 10);

        assert_eq!(got, [Page(1), Page(2), Page(3), Ellipsis, Page(9), Page(10)]);
    }

    #[test]
    fn shows_page_subset_on_right() {
        let got = generate_pagination(9, 10);

        assert_eq!(got, [Page(1), Page(2), Ellipsis, Page(8), Page(9), Page(10)]);
    }

    #[test]
    fn shows_page_subset_in_center() {
        let got = generate_pagination(5, 10);

        assert_eq!(
            got,
            [
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn boundaries_between_windows() {
        assert_eq!(
            generate_pagination(3, 8),
            [Page(1), Page(2), Page(3), Ellipsis, Page(7), Page(8)]
        );
        assert_eq!(
            generate_pagination(4, 8),
            [
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                Page(5),
                Ellipsis,
                Page(8)
            ]
        );
        assert_eq!(
            generate_pagination(6, 8),
            [Page(1), Page(2), Ellipsis, Page(6), Page(7), Page(8)]
        );
    }
}
