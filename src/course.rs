use crate::catalog::{PROGRAM, ProgramModule, module_label};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// One row of the `lessons` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub lesson_number: u32,
    pub module_id: u32,
    #[serde(default)]
    pub module_title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub video_url: Option<String>,
    pub sort_order: i32,
}

impl Lesson {
    pub fn heading(&self) -> String {
        format!("Урок {}: {}", self.lesson_number, self.title)
    }
}

/// Partition lessons by module id, keeping the fetch order inside each module.
pub fn group_by_module(lessons: &[Lesson]) -> BTreeMap<u32, Vec<&Lesson>> {
    let mut grouped: BTreeMap<u32, Vec<&Lesson>> = BTreeMap::new();
    for lesson in lessons {
        grouped.entry(lesson.module_id).or_default().push(lesson);
    }
    grouped
}

pub const DEFAULT_OPEN_MODULE: u32 = 1;

/// Dashboard UI state carried in the query string
///
/// `open` selects the expanded module (absent: the first, `0`: none) and
/// `lesson` the lesson shown in the player.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(default, deserialize_with = "lenient_module")]
    pub open: Option<u32>,
    pub lesson: Option<String>,
}

/// A hand-edited `open` that is not a module number counts as absent.
fn lenient_module<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse().ok()))
}

impl DashboardQuery {
    pub fn open_module(&self) -> Option<u32> {
        match self.open {
            None => Some(DEFAULT_OPEN_MODULE),
            Some(0) => None,
            Some(id) => Some(id),
        }
    }
}

fn dashboard_href(open: Option<u32>, lesson: Option<&str>) -> String {
    let mut href = format!("/dashboard?open={}", open.unwrap_or(0));
    if let Some(lesson) = lesson {
        href.push_str("&lesson=");
        href.push_str(&urlencoding::encode(lesson));
    }
    href
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonLink {
    pub heading: String,
    pub href: String,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePanel {
    pub label: String,
    pub title: &'static str,
    pub is_open: bool,
    pub toggle_href: String,
    pub lessons: Vec<LessonLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonDetail {
    pub heading: String,
    pub module_badge: String,
    pub duration_label: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
}

impl From<&Lesson> for LessonDetail {
    fn from(lesson: &Lesson) -> Self {
        Self {
            heading: lesson.heading(),
            module_badge: format!("Модуль {}", lesson.module_id),
            duration_label: lesson
                .duration_minutes
                .filter(|minutes| *minutes > 0)
                .map(|minutes| format!("{minutes} мин")),
            description: lesson
                .description
                .clone()
                .filter(|description| !description.is_empty()),
            video_url: lesson.video_url.clone().filter(|url| !url.is_empty()),
        }
    }
}

/// Sidebar of modules plus the player, as shown to entitled users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseBrowser {
    pub modules: Vec<ModulePanel>,
    pub selected: Option<LessonDetail>,
}

impl CourseBrowser {
    pub fn build(lessons: &[Lesson], query: &DashboardQuery) -> Self {
        let by_module = group_by_module(lessons);
        let open = query.open_module();
        let selected = query
            .lesson
            .as_deref()
            .and_then(|id| lessons.iter().find(|lesson| lesson.id == id));
        let selected_id = selected.map(|lesson| lesson.id.as_str());

        let modules = PROGRAM
            .iter()
            .map(|module| {
                let lessons = by_module.get(&module.id).map(Vec::as_slice).unwrap_or(&[]);
                panel(module, lessons, open, selected_id)
            })
            .collect();

        Self {
            modules,
            selected: selected.map(LessonDetail::from),
        }
    }
}

fn panel(
    module: &ProgramModule,
    lessons: &[&Lesson],
    open: Option<u32>,
    selected_id: Option<&str>,
) -> ModulePanel {
    let is_open = open == Some(module.id);
    let toggle = if is_open { None } else { Some(module.id) };

    ModulePanel {
        label: module_label(module.id),
        title: module.title,
        is_open,
        toggle_href: dashboard_href(toggle, selected_id),
        lessons: lessons
            .iter()
            .map(|lesson| LessonLink {
                heading: lesson.heading(),
                href: dashboard_href(Some(module.id), Some(&lesson.id)),
                is_selected: selected_id == Some(lesson.id.as_str()),
            })
            .collect(),
    }
}
