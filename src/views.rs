// Page templates rendered with Askama

use crate::catalog::{
    FAQ, FaqEntry, GALLERY, GalleryItem, PAIN_POINTS, PAYMENT_PENDING_LABEL, POPULAR_BADGE,
    PRICING, PROGRAM, PainPoint, PricingPlan, ProgramModule, STUDIO_STATS, StudioStat,
    total_lessons,
};
use crate::course::CourseBrowser;
use crate::credentials::AuthMode;
use crate::error::AppError;
use askama::Template;
use axum::response::Html;

pub fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}

// ============================================================================
// Landing
// ============================================================================

#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub quote: String,
    pub program: &'static [ProgramModule],
    pub pricing: &'static [PricingPlan],
    pub gallery: &'static [GalleryItem],
    pub pain_points: &'static [PainPoint],
    pub stats: &'static [StudioStat],
    pub faq: &'static [FaqEntry],
    pub lesson_count: u32,
    pub module_count: usize,
    pub popular_badge: &'static str,
}

impl LandingTemplate {
    pub fn new(quote: String) -> Self {
        Self {
            quote,
            program: &PROGRAM,
            pricing: &PRICING,
            gallery: &GALLERY,
            pain_points: &PAIN_POINTS,
            stats: &STUDIO_STATS,
            faq: &FAQ,
            lesson_count: total_lessons(),
            module_count: PROGRAM.len(),
            popular_badge: POPULAR_BADGE,
        }
    }
}

// ============================================================================
// Sign in / sign up
// ============================================================================

#[derive(Template)]
#[template(path = "auth.html")]
pub struct AuthTemplate {
    pub mode: AuthMode,
    pub email: String,
    pub full_name: String,
    pub error: Option<String>,
    pub message: Option<String>,
}

impl AuthTemplate {
    pub fn blank(mode: AuthMode) -> Self {
        Self {
            mode,
            email: String::new(),
            full_name: String::new(),
            error: None,
            message: None,
        }
    }
}

// ============================================================================
// Dashboard
// ============================================================================

pub const DASHBOARD_READY: &str = "Ваши уроки готовы. Творите!";
pub const DASHBOARD_LOCKED: &str = "Купите курс, чтобы открыть доступ к урокам";

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub email: String,
    pub subtitle: &'static str,
    pub plans: &'static [PricingPlan],
    pub payment_label: &'static str,
    pub popular_badge: &'static str,
    /// Present only for entitled users
    pub browser: Option<CourseBrowser>,
}

impl DashboardTemplate {
    pub fn locked(email: String) -> Self {
        Self {
            email,
            subtitle: DASHBOARD_LOCKED,
            plans: &PRICING,
            payment_label: PAYMENT_PENDING_LABEL,
            popular_badge: POPULAR_BADGE,
            browser: None,
        }
    }

    pub fn unlocked(email: String, browser: CourseBrowser) -> Self {
        Self {
            subtitle: DASHBOARD_READY,
            browser: Some(browser),
            ..Self::locked(email)
        }
    }
}
