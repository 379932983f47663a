use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Success styling
    Default,
    /// Error styling
    Destructive,
}

/// A transient message for the toast surface. Produced by the contact form,
/// rendered by whatever implements [`NotificationSink`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn new(title: &str, description: &str, variant: Variant) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant,
        }
    }

    pub fn sent() -> Self {
        Self::new(
            "Pesan Terkirim! ✅",
            "Terima kasih atas masukan Anda. Saya akan membalas segera!",
            Variant::Default,
        )
    }

    pub fn missing_fields() -> Self {
        Self::new(
            "Error",
            "Harap isi semua field yang required",
            Variant::Destructive,
        )
    }

    pub fn send_failed() -> Self {
        Self::new(
            "Error",
            "Gagal mengirim pesan. Silakan coba lagi.",
            Variant::Destructive,
        )
    }

    pub fn is_error(&self) -> bool {
        self.variant == Variant::Destructive
    }
}

pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}
