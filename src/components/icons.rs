//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::CapabilityIcon;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowRight as ArrowRight, LuArrowUpRight as ArrowUpRight, LuChevronLeft as ChevronLeft,
        LuChevronRight as ChevronRight, LuCircleCheck as Check, LuGithub as Github,
        LuGlobe as Globe, LuLaptop as Web, LuLinkedin as Linkedin, LuMail as Mail,
        LuMapPin as Location, LuMenu as Menu, LuPaintbrush as Design, LuPhone as Phone,
        LuRocket as Strategy, LuSmartphone as Mobile, LuTerminal as Terminal,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRight as ArrowRight, BsArrowUpRight as ArrowUpRight, BsBrush as Design,
        BsCheckCircle as Check, BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight,
        BsEnvelope as Mail, BsGeoAltFill as Location, BsGithub as Github, BsGlobe as Globe,
        BsLaptop as Web, BsLinkedin as Linkedin, BsList as Menu, BsPhone as Mobile,
        BsRocket as Strategy, BsTelephone as Phone, BsTerminal as Terminal,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(ARROW_RIGHT, ArrowRight);
themed_icon!(ARROW_UP_RIGHT, ArrowUpRight);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CHECK, Check);
themed_icon!(CLOSE, Close);
themed_icon!(MENU, Menu);
themed_icon!(GITHUB, Github);
themed_icon!(LINKEDIN, Linkedin);
themed_icon!(GLOBE, Globe);
themed_icon!(MAIL, Mail);
themed_icon!(PHONE, Phone);
themed_icon!(LOCATION, Location);
themed_icon!(TERMINAL, Terminal);
themed_icon!(MOBILE, Mobile);
themed_icon!(WEB, Web);
themed_icon!(DESIGN, Design);
themed_icon!(STRATEGY, Strategy);

/// Icon for a capability card.
pub fn capability(icon: CapabilityIcon) -> Icon {
    match icon {
        CapabilityIcon::Mobile => MOBILE,
        CapabilityIcon::Web => WEB,
        CapabilityIcon::Design => DESIGN,
        CapabilityIcon::Strategy => STRATEGY,
    }
}
