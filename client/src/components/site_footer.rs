//! Static page footer with policy links and a contact address.
//!
//! Policy pages are static files served by the host, not Leptos routes, so the
//! links are marked `rel="external"` to bypass client-side routing.

#[cfg(test)]
#[path = "site_footer_test.rs"]
mod site_footer_test;

use leptos::prelude::*;

pub const CONTACT_EMAIL: &str = "support@daybook.app";

/// Footer navigation, in display order.
pub const FOOTER_LINKS: &[(&str, &str)] = &[
    ("Terms of Service", "/terms"),
    ("Privacy Policy", "/privacy"),
    ("Refund Policy", "/refund-policy"),
];

fn contact_href() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <nav class="site-footer__links">
                {FOOTER_LINKS
                    .iter()
                    .map(|(label, href)| {
                        view! {
                            <a class="site-footer__link" href=*href rel="external">
                                {*label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <a class="site-footer__contact" href=contact_href()>
                "Contact us"
            </a>
            <p class="site-footer__brand">"Daybook"</p>
        </footer>
    }
}
