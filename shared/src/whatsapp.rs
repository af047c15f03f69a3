use crate::contact::ContactSubmission;
use crate::COMPANY_NAME;

pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Recipient used for every pre-filled chat on the site.
pub const DEFAULT_RECIPIENT: &str = "918745060006";

pub const QUICK_CONTACT_MESSAGE: &str =
    "Hello FortiSecure, I would like to inquire about your services. Please contact me.";

/// A `wa.me` link with a pre-filled message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    url: String,
    text: String,
}

impl DeepLink {
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The message before encoding.
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppChannel {
    recipient: String,
}

impl Default for WhatsAppChannel {
    fn default() -> Self {
        Self::new(DEFAULT_RECIPIENT)
    }
}

impl WhatsAppChannel {
    /// `recipient` is an international number; anything but digits is dropped.
    pub fn new(recipient: &str) -> Self {
        Self {
            recipient: recipient.chars().filter(|c| c.is_ascii_digit()).collect(),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Plain chat link without a message, used by the footer icon.
    pub fn chat_url(&self) -> String {
        format!("{}/{}", WHATSAPP_BASE_URL, self.recipient)
    }

    pub fn link(&self, text: impl Into<String>) -> DeepLink {
        let text = text.into();
        let url = format!(
            "{}/{}?text={}",
            WHATSAPP_BASE_URL,
            self.recipient,
            urlencoding::encode(&text)
        );
        DeepLink { url, text }
    }

    pub fn submission_link(&self, submission: &ContactSubmission) -> DeepLink {
        self.link(submission_message(submission))
    }

    pub fn quick_contact_link(&self) -> DeepLink {
        self.link(QUICK_CONTACT_MESSAGE)
    }

    pub fn service_inquiry_link(&self, service_title: &str) -> DeepLink {
        self.link(service_inquiry_message(service_title))
    }
}

pub fn submission_message(submission: &ContactSubmission) -> String {
    format!(
        "Hello {}!\n\nName: {}\nEmail: {}\nPhone: {}\n\nMessage:\n{}",
        COMPANY_NAME,
        submission.name(),
        submission.email(),
        submission.phone(),
        submission.message()
    )
}

pub fn service_inquiry_message(service_title: &str) -> String {
    format!(
        "Hello {}, I am interested in {}. Please contact me.",
        COMPANY_NAME, service_title
    )
}
