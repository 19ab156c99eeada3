//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Content fixtures are loaded at compile time using `include_str!`.

// =============================================================================
// Content Fixtures (loaded at compile time)
// =============================================================================

/// Product catalog.
pub const PRODUCTS_JSON: &str = include_str!("../assets/data/products.json");

/// Service catalog.
pub const SERVICES_JSON: &str = include_str!("../assets/data/services.json");

/// Capability cards for the home page stack.
pub const CAPABILITIES_JSON: &str = include_str!("../assets/data/capabilities.json");

/// Team members.
pub const TEAM_JSON: &str = include_str!("../assets/data/team.json");

/// Testimonial slides.
pub const TESTIMONIALS_JSON: &str = include_str!("../assets/data/testimonials.json");

// =============================================================================
// Application Metadata
// =============================================================================

/// Company name displayed in the navbar, splash and footer.
pub const APP_NAME: &str = "NS Apps Innovations";

/// Short brand mark used where space is tight.
pub const APP_SHORT_NAME: &str = "NS Apps";

/// Hero tagline.
pub const APP_TAGLINE: &str = "We design and build digital products people love to use.";

/// Year shown in the footer copyright line.
pub const COPYRIGHT_YEAR: u32 = 2026;

// =============================================================================
// Contact
// =============================================================================

pub mod contact {
    /// Address the contact form composes a `mailto:` link for.
    pub const EMAIL: &str = "hello@nsappsinnovations.com";
    pub const PHONE: &str = "+91 98765 43210";
    pub const ADDRESS: &str = "Patna, Bihar, India";

    /// Minimum message length accepted by the contact form.
    pub const MIN_MESSAGE_LEN: usize = 10;
    /// Maximum message length accepted by the contact form.
    pub const MAX_MESSAGE_LEN: usize = 2000;
}

/// Studio profiles linked from the footer.
pub mod socials {
    pub const GITHUB: &str = "https://github.com/nsappsinnovations";
    pub const LINKEDIN: &str = "https://www.linkedin.com/company/nsappsinnovations";
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Catalog source configuration.
pub mod catalog {
    /// Base URL serving `products.json` and `services.json`.
    ///
    /// Read from `NSAPPS_CATALOG_URL` at build time. Unset serves the
    /// bundled fixtures only; when set, the remote copy wins and the
    /// bundled fixtures are the fallback.
    pub const REMOTE_BASE_URL: Option<&str> = option_env!("NSAPPS_CATALOG_URL");

    /// sessionStorage key for the cached remote product catalog.
    pub const PRODUCTS_CACHE_KEY: &str = "catalog_products";
    /// sessionStorage key for the cached remote service catalog.
    pub const SERVICES_CACHE_KEY: &str = "catalog_services";
}

/// Allowed domains for external links (live sites, source, social).
/// Links to other domains are not opened.
pub const ALLOWED_EXTERNAL_DOMAINS: &[&str] = &[
    "github.com",
    "gitlab.com",
    "linkedin.com",
    "twitter.com",
    "x.com",
    "instagram.com",
    "behance.net",
    "dribbble.com",
    "nsappsinnovations.com",
];

// =============================================================================
// Splash Configuration
// =============================================================================

/// Splash sequence delay constants (milliseconds).
pub mod splash_delays {
    /// Delay after the brand mark appears.
    pub const BRAND: u32 = 450;
    /// Delay between progress lines.
    pub const STEP: u32 = 180;
    /// Hold on the final frame before the splash fades out.
    pub const HOLD: u32 = 500;
    /// Fade-out duration; must match `splash.module.css`.
    pub const FADE_OUT: u32 = 400;
}

// =============================================================================
// Motion Configuration
// =============================================================================

/// Scroll and animation constants shared by the home and catalog pages.
pub mod motion {
    /// Scroll distance per card while the capability stack is pinned (px).
    pub const STACK_DISTANCE_PER_CARD: f64 = 600.0;
    /// Stack offset applied per card depth (px).
    pub const STACK_OFFSET_PX: f64 = 15.0;
    /// Scale reduction per card depth.
    pub const STACK_SCALE_STEP: f64 = 0.05;

    /// Scroll distance per panel while a showcase is pinned (px).
    pub const SHOWCASE_DISTANCE_PER_PANEL: f64 = 1500.0;

    /// Lag of scrubbed scroll animations (seconds).
    pub const SCRUB_SECONDS: f64 = 1.0;

    /// Reveal trigger line as a fraction of the viewport height ("top 80%").
    pub const REVEAL_START: f64 = 0.8;
    /// Stagger between revealed cards (seconds).
    pub const REVEAL_STAGGER: f64 = 0.1;

    /// Parallax travel of detail hero images (percent of element height).
    pub const PARALLAX_Y_PERCENT: f64 = -15.0;

    /// Cursor follow duration (seconds).
    pub const CURSOR_FOLLOW_SECONDS: f64 = 1.0;
    /// Cursor grow/shrink duration (seconds).
    pub const CURSOR_SCALE_SECONDS: f64 = 0.4;
    /// Cursor scale while hovering interactive elements.
    pub const CURSOR_HOVER_SCALE: f64 = 1.8;
    /// Elements that grow the cursor while hovered.
    pub const CURSOR_HOVER_SELECTOR: &str = "button, a, [data-cursor=\"grow\"]";

    /// Media query that disables pointer and scroll effects.
    pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
    /// Media query for devices without a fine pointer.
    pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";
    /// Below this width, pinned sections fall back to plain stacked layout.
    pub const NARROW_QUERY: &str = "(max-width: 767px)";
}

/// String curve geometry (SVG user units).
pub mod curve {
    pub const WIDTH: f64 = 1400.0;
    pub const HEIGHT: f64 = 220.0;
    /// Horizontal inset of the fixed end points.
    pub const INSET: f64 = 60.0;
    /// Pulling further than this from the centre releases the string.
    pub const PULL_THRESHOLD: f64 = 220.0;
    /// Vertical distance from the rest line that grabs the string.
    pub const GRAB_THRESHOLD: f64 = 30.0;
    /// Follow duration while grabbed (seconds).
    pub const FOLLOW_SECONDS: f64 = 0.2;
    /// Spring-back duration after release (seconds).
    pub const RELEASE_SECONDS: f64 = 1.5;
}

// =============================================================================
// Carousel Configuration
// =============================================================================

/// Testimonial carousel options.
pub mod carousel {
    /// Autoplay interval in milliseconds.
    pub const AUTOPLAY_MS: f64 = 5000.0;
    /// How often the autoplay deadline is checked (milliseconds).
    pub const AUTOPLAY_POLL_MS: u64 = 100;
    /// Slide transition duration in milliseconds.
    pub const SPEED_MS: u32 = 500;
    /// Visible slides; the centred slide is flanked by partial neighbours.
    pub const SLIDES_PER_VIEW: f64 = 1.5;
    /// Gap between slides (px).
    pub const SPACE_BETWEEN: f64 = 30.0;
    /// Opacity of slides that are not active.
    pub const INACTIVE_OPACITY: f64 = 0.5;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;

/// Home page sections reachable from the navbar, as `(anchor id, label)`.
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("about", "About"),
    ("services", "Services"),
    ("projects", "Projects"),
    ("team", "Team"),
    ("contact", "Contact"),
];
