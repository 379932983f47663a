use std::time::Duration;

/// Per-position offset for the card entrance animation. Cosmetic only.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub id: u32,
    pub platform: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub icon_bg: &'static str,
}

/// Display order is table order.
pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        id: 1,
        platform: "Instagram",
        title: "Instagram",
        description: "@safe_rill",
        url: "https://www.instagram.com/safe_rill/",
        icon_bg: "bg-gradient-to-br from-pink-500 to-orange-500 text-white",
    },
    SocialLink {
        id: 2,
        platform: "TikTok",
        title: "TikTok",
        description: "@safe_rill",
        url: "https://www.tiktok.com/@safe_rill",
        icon_bg: "bg-gradient-to-br from-gray-900 to-gray-700 text-white",
    },
    SocialLink {
        id: 3,
        platform: "WhatsApp",
        title: "WhatsApp",
        description: "085143001281",
        url: "https://wa.me/6285143001281?text=Halo%20Moch.%20Syafril%20Ramadhani!",
        icon_bg: "bg-gradient-to-br from-green-500 to-green-600 text-white",
    },
    SocialLink {
        id: 4,
        platform: "Email",
        title: "Email",
        description: "Mochsyafrilramadhani5@gmail.com",
        url: "mailto:Mochsyafrilramadhani5@gmail.com?subject=Kontak%20dari%20Website&body=Halo%20Moch.%20Syafril%20Ramadhani,%0A%0A",
        icon_bg: "bg-gradient-to-br from-blue-500 to-blue-600 text-white",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Instagram,
    WhatsApp,
    Email,
    TikTok,
    Placeholder,
}

impl Icon {
    /// Case-insensitive. Anything unknown gets the placeholder glyph.
    pub fn for_platform(platform: &str) -> Self {
        match platform.to_lowercase().as_str() {
            "instagram" => Self::Instagram,
            "whatsapp" => Self::WhatsApp,
            "email" => Self::Email,
            "tiktok" => Self::TikTok,
            _ => Self::Placeholder,
        }
    }

    /// Icon font class. The placeholder has no glyph.
    pub fn glyph_class(&self) -> Option<&'static str> {
        match self {
            Self::Instagram => Some("extra-instagram"),
            Self::WhatsApp => Some("extra-message-circle"),
            Self::Email => Some("extra-email"),
            Self::TikTok => Some("extra-music"),
            Self::Placeholder => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkEntry {
    pub key: u32,
    pub position: usize,
    pub link: SocialLink,
}

impl LinkEntry {
    pub fn icon(&self) -> Icon {
        Icon::for_platform(self.link.platform)
    }

    pub fn animation_delay(&self) -> Duration {
        let steps = u32::try_from(self.position).unwrap_or(u32::MAX);
        STAGGER_STEP.saturating_mul(steps)
    }
}

pub fn entries(links: &[SocialLink]) -> Vec<LinkEntry> {
    links
        .iter()
        .enumerate()
        .map(|(position, link)| LinkEntry {
            key: link.id,
            position,
            link: *link,
        })
        .collect()
}

/// Opens a URL in a fresh, unreferenced browsing context.
pub trait LinkOpener {
    fn open(&self, url: &str);
}

/// Returns whether anything was opened. Empty URLs are a no-op.
pub fn activate(link: &SocialLink, opener: &impl LinkOpener) -> bool {
    if link.url.is_empty() {
        return false;
    }
    log::debug!("opening {} link", link.platform);
    opener.open(link.url);
    true
}
