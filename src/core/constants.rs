/// Page interaction tuning constants and the DOM contract.
///
/// Thresholds, selectors and user-facing strings are kept here so the
/// handlers read as intent rather than magic values.

// Scroll effects (CSS pixels)
pub const HEADER_SCROLLED_THRESHOLD_PX: f64 = 50.0; // past this the header gets `scrolled`
pub const HEADER_HIDE_THRESHOLD_PX: f64 = 100.0; // downward scrolling past this hides the header

// Entrance animation
pub const REVEAL_THRESHOLD: f64 = 0.1; // visible fraction that triggers a reveal
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_STAGGER_MS: u32 = 100; // delay between reveals within one batch
pub const REVEAL_HIDDEN_OPACITY: &str = "0";
pub const REVEAL_HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const REVEAL_TRANSITION: &str = "all 0.8s cubic-bezier(0.4, 0, 0.2, 1)";
pub const REVEAL_SHOWN_OPACITY: &str = "1";
pub const REVEAL_SHOWN_TRANSFORM: &str = "translateY(0)";

// Card hover
pub const CARD_HOVER_TRANSFORM: &str = "translateY(-10px) scale(1.02)";
pub const CARD_REST_TRANSFORM: &str = "translateY(0) scale(1)";

// Header hide/show
pub const HEADER_HIDDEN_TRANSFORM: &str = "translateY(-100%)";
pub const HEADER_SHOWN_TRANSFORM: &str = "translateY(0)";

// Load timing
pub const SLOW_LOAD_THRESHOLD_MS: f64 = 3000.0;
pub const BODY_FADE_TRANSITION: &str = "opacity 0.5s ease-in";
pub const HERO_ANIMATION: &str = "fadeInUp 1.2s cubic-bezier(0.4, 0, 0.2, 1)";

// Navigation
pub const DEFAULT_SECTION_ID: &str = "home";

// Element ids
pub const HEADER_ID: &str = "header";
pub const SCROLL_PROGRESS_ID: &str = "scrollProgress";
pub const NAV_MENU_ID: &str = "navMenu";
pub const MOBILE_TOGGLE_ID: &str = "mobileToggle";

// Selectors
pub const SECTION_SELECTOR: &str = ".page-section";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAV_TARGET_ATTR: &str = "data-page";
pub const FORM_SELECTOR: &str = "form";
pub const REVEAL_SELECTOR: &str = ".service-card, .video-card, .cost-highlight, .contact-item";
pub const HOVER_SELECTOR: &str = ".service-card, .video-card";
pub const VIDEO_CARD_SELECTOR: &str = ".video-card";
pub const VIDEO_TITLE_SELECTOR: &str = "h4";
pub const CONTACT_ITEM_SELECTOR: &str = ".contact-item";
pub const CONTACT_LABEL_SELECTOR: &str = ".contact-details h4";
pub const CONTACT_VALUE_SELECTOR: &str = ".contact-details p";
pub const HERO_SELECTOR: &str = ".hero-content";

// Classes
pub const ACTIVE_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const FADE_IN_CLASS: &str = "fade-in";
pub const KEYBOARD_NAV_CLASS: &str = "keyboard-navigation";

// Mobile menu trigger glyphs
pub const ICON_BARS_HTML: &str = r#"<i class="fas fa-bars"></i>"#;
pub const ICON_CLOSE_HTML: &str = r#"<i class="fas fa-times"></i>"#;

// User-facing notifications
pub const FORM_INCOMPLETE_MESSAGE: &str = "Sila lengkapkan semua maklumat yang diperlukan.";
pub const FORM_SENT_MESSAGE: &str =
    "Terima kasih! Mesej anda telah dihantar. Kami akan menghubungi anda tidak lama lagi.";
pub const VIDEO_PLACEHOLDER_SUFFIX: &str =
    "akan dibuka. Dalam implementasi sebenar, ini akan membuka pemain video.";

// Contact labels
pub const PHONE_LABELS: [&str; 2] = ["Telefon", "WhatsApp"];
pub const EMAIL_LABEL: &str = "Email";
