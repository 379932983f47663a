use chrono::{Datelike, Local};

#[derive(Debug, Clone, Copy)]
pub struct ProfileData {
    pub name: &'static str,
    pub profile_photo: &'static str,
    pub bio: &'static str,
}

pub static PROFILE: ProfileData = ProfileData {
    name: "Moch. Syafril Ramadhani",
    profile_photo: "https://customer-assets.emergentagent.com/job_saferill-social/artifacts/ckzj1933_IMG-20250715-WA0000.jpg",
    bio: "Connect with me on social media",
};

impl ProfileData {
    pub fn initials(&self) -> String {
        initials(self.name)
    }
}

/// First character of every space-separated token. Punctuation is kept,
/// empty tokens are skipped.
pub fn initials(name: &str) -> String {
    name.split(' ').filter_map(|token| token.chars().next()).collect()
}

#[derive(Debug, Clone, Copy)]
pub struct FooterData {
    pub created: &'static str,
    pub author: &'static str,
    pub site: &'static str,
}

pub static FOOTER: FooterData = FooterData {
    created: "Agustus 2025",
    author: "Moch. Syafril Ramadhani",
    site: "Website Profil Sosial Media",
};

impl FooterData {
    pub fn copyright_line(&self, year: i32) -> String {
        format!("© {year} - {}", self.site)
    }
}

pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_from_profile_name() {
        assert_eq!(PROFILE.initials(), "MSR");
    }

    #[test]
    fn test_initials_edge_cases() {
        assert_eq!(initials("Ana"), "A");
        assert_eq!(initials(""), "");
        assert_eq!(initials("ana  maria"), "am");
        assert_eq!(initials(".net core"), ".c");
        // tabs are not separators
        assert_eq!(initials("a\tb c"), "ac");
        assert_eq!(initials("Élodie Ñúñez"), "ÉÑ");
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            FOOTER.copyright_line(2026),
            "© 2026 - Website Profil Sosial Media"
        );
    }

    #[test]
    fn test_current_year_is_plausible() {
        assert!(current_year() >= 2025);
    }
}
