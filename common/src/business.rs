use serde::{Deserialize, Serialize};

use crate::phone::PhoneNumber;

/// Who the business is and where it works.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessIdentity {
    /// Brand name shown in the header and footer.
    pub name: String,
    /// Name used in the copyright notice.
    pub legal_name: String,
    pub tagline: String,
    pub city: String,
    pub region: String,
    pub phone: PhoneNumber,
    pub address_lines: Vec<String>,
    pub service_zip_codes: Vec<String>,
    pub hours: String,
}

impl BusinessIdentity {
    pub fn service_area(&self) -> String {
        format_zip_list(&self.service_zip_codes)
    }
}

/// Join zip codes as prose: "60540, 60563, and 60564".
pub fn format_zip_list<S: AsRef<str>>(zips: &[S]) -> String {
    match zips {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|z| z.as_ref()).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Footer notice, e.g. "© 2026 Frozen Catch Basin Thawing. All Rights Reserved."
pub fn copyright_notice(year: i32, legal_name: &str) -> String {
    format!("© {year} {legal_name}. All Rights Reserved.")
}
