//! Home page content: capability cards, team and testimonials.

use serde::{Deserialize, Serialize};

/// Icon shown on a capability card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityIcon {
    Mobile,
    Web,
    Design,
    Strategy,
}

/// One card in the home page capability stack.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Capability {
    /// Display index ("01").
    pub index: String,
    pub icon: CapabilityIcon,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub tag: String,
    /// Service detail opened by the card's "EXECUTE" link.
    pub service_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub image: String,
    pub bio: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    pub company: String,
    pub quote: String,
    pub image: String,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub date: Option<String>,
}

impl Testimonial {
    /// Line under the name: the role when present, else the company.
    pub fn byline(&self) -> &str {
        self.role.as_deref().unwrap_or(&self.company)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byline_prefers_role() {
        let mut t = Testimonial {
            id: 1,
            name: "A".into(),
            role: None,
            company: "Bihar Eats".into(),
            quote: "q".into(),
            image: "/a.png".into(),
            rating: None,
            date: None,
        };
        assert_eq!(t.byline(), "Bihar Eats");
        t.role = Some("Director".into());
        assert_eq!(t.byline(), "Director");
    }

    #[test]
    fn test_capability_icon_lowercase() {
        let icon: CapabilityIcon = serde_json::from_str("\"strategy\"").unwrap();
        assert_eq!(icon, CapabilityIcon::Strategy);
    }
}
