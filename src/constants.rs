pub const RENDER_WIDTH: i32 = 1280;           // Width of the demo window
pub const RENDER_HEIGHT: i32 = 720;           // Height of the demo window
pub const FPS: u32 = 60;                      // Frames per second

pub const FADE_OUT_DURATION: f32 = 0.3;       // Regions fading out before the content swap (seconds)
pub const FADE_IN_DURATION: f32 = 0.44;       // Regions fading back in after the swap (seconds)
pub const FADE_IN_STAGGER: f32 = 0.02;        // Delay between consecutive regions fading in (seconds)
pub const FADE_OFFSET: f32 = 20.0;            // Downward offset of a faded-out region (pixels)

pub const AUTOPLAY_DELAY_MS: u64 = 6000;      // Default delay between autoplay advances
pub const SWIPE_THRESHOLD: f32 = 50.0;        // Minimum horizontal drag recognized as a swipe (pixels)

pub const MAX_FEATURED_PETS: usize = 6;       // Slides shown in the hero carousel
pub const ADOPT_PATH: &str = "/adopt";        // Prefix of the adoption detail links

pub const TOAST_DURATION: f32 = 3.0;          // Lifetime of a toast notification (seconds)
pub const TOAST_FADE: f32 = 0.3;              // Final part of a toast's lifetime spent fading out (seconds)
pub const MAX_VISIBLE_TOASTS: usize = 4;      // Older toasts are dropped beyond this

pub const MODAL_FADE: f32 = 0.2;              // Modal fade in/out (seconds)
pub const BACK_TO_TOP_THRESHOLD: f32 = 300.0; // Scroll offset past which the back-to-top button shows (pixels)
pub const BACK_TO_TOP_DURATION: f32 = 0.6;    // Smooth scroll back to the top (seconds)

pub const MIN_USERNAME_LEN: usize = 3;        // Shortest accepted username
pub const MIN_PASSWORD_LEN: usize = 6;        // Shortest accepted password
