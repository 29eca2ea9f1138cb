use crate::config::Config;
use crate::content::{projects, random_quote, skill_categories, Project, SkillCategory};
use crate::rotation::{
    Carousel, CarouselSettings, Collection, ContentItem, FsMediaResolver, MediaResolver,
    MediaStatus, PhaseKind, RotationError,
};
use crate::ui::chat::{ChatIntent, ChatPanelState, ChatReducer};
use crate::ui::mvi::Reducer;
use crate::ui::section::Section;
use std::sync::Arc;
use std::time::Instant;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// A question ready to be sent to the chat client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub request_id: u64,
    pub message: String,
    pub context: String,
}

/// Everything the app needs at startup.
pub struct AppOptions {
    pub settings: CarouselSettings,
    pub quotes: Vec<ContentItem>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub media: Arc<dyn MediaResolver>,
    pub section: Section,
    pub chat_online: bool,
}

impl AppOptions {
    pub fn from_config(config: &Config, section: Section, chat_online: bool) -> Self {
        Self {
            settings: config.rotation.carousel_settings(),
            quotes: config.quotes.resolve_items(),
            projects: projects(),
            skills: skill_categories(),
            media: Arc::new(FsMediaResolver::new(config.quotes.media_dir.clone())),
            section,
            chat_online,
        }
    }
}

/// Object-safe view of a carousel, whatever it shows.
trait Rotating {
    fn on_tick(&mut self, now: Instant) -> bool;
    fn select_explicit(&mut self, index: usize, now: Instant) -> Result<(), RotationError>;
    fn step(&mut self, delta: isize, now: Instant);
    fn remount(&mut self, now: Instant);
    fn unmount(&mut self);
}

impl<T> Rotating for Carousel<T> {
    fn on_tick(&mut self, now: Instant) -> bool {
        Carousel::on_tick(self, now)
    }

    fn select_explicit(&mut self, index: usize, now: Instant) -> Result<(), RotationError> {
        Carousel::select_explicit(self, index, now)
    }

    fn step(&mut self, delta: isize, now: Instant) {
        Carousel::step(self, delta, now)
    }

    fn remount(&mut self, now: Instant) {
        Carousel::remount(self, now)
    }

    fn unmount(&mut self) {
        Carousel::unmount(self)
    }
}

pub struct App {
    should_quit: bool,
    section: Section,
    size: Option<(u16, u16)>,
    quotes: Carousel<ContentItem>,
    projects: Carousel<Project>,
    skills: Carousel<SkillCategory>,
    /// Resolved once at startup, indexed like the collections.
    quote_media: Vec<Option<MediaStatus>>,
    project_media: Vec<MediaStatus>,
    /// State of the chat panel (MVI pattern).
    chat_panel: ChatPanelState,
    chat_online: bool,
    /// Picked once per run for the hero section.
    hero_quote: &'static str,
}

impl App {
    pub fn new(options: AppOptions, now: Instant) -> Self {
        let AppOptions {
            settings,
            quotes,
            projects,
            skills,
            media,
            section,
            chat_online,
        } = options;

        let quotes = Collection::or_placeholder(quotes);
        let projects = Collection::or_placeholder(projects);
        let skills = Collection::or_placeholder(skills);

        let quote_media = quotes
            .iter()
            .map(|item| item.media().map(|m| media.resolve(m)))
            .collect();
        let project_media = projects.iter().map(|p| media.resolve(&p.image)).collect();

        let mut app = Self {
            should_quit: false,
            section,
            size: None,
            quotes: Carousel::mount(quotes, settings, now),
            projects: Carousel::mount(projects, settings, now),
            skills: Carousel::mount(skills, settings, now),
            quote_media,
            project_media,
            chat_panel: ChatPanelState::default(),
            chat_online,
            hero_quote: random_quote(),
        };

        // Only the visible section keeps a running carousel
        for other in Section::ALL.into_iter().filter(|s| *s != section) {
            if let Some(carousel) = app.carousel_mut(other) {
                carousel.unmount();
            }
        }
        tracing::debug!(section = ?section, "App started");
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Switch sections, unmounting the old carousel and remounting the new
    /// one at its first item.
    pub fn set_section(&mut self, section: Section, now: Instant) {
        if section == self.section {
            return;
        }
        let previous = self.section;
        if let Some(carousel) = self.carousel_mut(previous) {
            carousel.unmount();
        }
        self.section = section;
        if let Some(carousel) = self.carousel_mut(section) {
            carousel.remount(now);
        }
        tracing::debug!(section = ?section, "Section changed");
    }

    pub fn next_section(&mut self, now: Instant) {
        self.set_section(self.section.next(), now);
    }

    pub fn prev_section(&mut self, now: Instant) {
        self.set_section(self.section.prev(), now);
    }

    /// Periodic tick: drives the visible carousel and the chat spinner.
    pub fn on_tick(&mut self, now: Instant) {
        let section = self.section;
        if let Some(carousel) = self.carousel_mut(section) {
            if carousel.on_tick(now) {
                tracing::debug!(section = ?section, "Auto-advanced");
            }
        }
        self.dispatch_chat(ChatIntent::AnimationTick);
    }

    /// Jump to `index` in the visible carousel. Returns false when there is
    /// no carousel or the index is out of range.
    pub fn select_item(&mut self, index: usize, now: Instant) -> bool {
        let section = self.section;
        let Some(carousel) = self.carousel_mut(section) else {
            return false;
        };
        match carousel.select_explicit(index, now) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(section = ?section, error = %err, "Ignored item selection");
                false
            }
        }
    }

    pub fn step_item(&mut self, delta: isize, now: Instant) {
        let section = self.section;
        if let Some(carousel) = self.carousel_mut(section) {
            carousel.step(delta, now);
        }
    }

    /// Whether a fade is on screen at `now` and frames should be drawn faster.
    pub fn is_animating(&self, now: Instant) -> bool {
        let presented = match self.section {
            Section::Quotes => self.quotes.presentation(now).1,
            Section::Projects => self.projects.presentation(now).1,
            Section::Skills => self.skills.presentation(now).1,
            Section::Hero | Section::Contact => return false,
        };
        presented.phase != PhaseKind::Idle
    }

    pub fn quotes(&self) -> &Carousel<ContentItem> {
        &self.quotes
    }

    pub fn projects(&self) -> &Carousel<Project> {
        &self.projects
    }

    pub fn skills(&self) -> &Carousel<SkillCategory> {
        &self.skills
    }

    pub fn hero_quote(&self) -> &'static str {
        self.hero_quote
    }

    pub fn quote_media(&self, index: usize) -> Option<&MediaStatus> {
        self.quote_media.get(index).and_then(Option::as_ref)
    }

    pub fn project_media(&self, index: usize) -> Option<&MediaStatus> {
        self.project_media.get(index)
    }

    // ========================================================================
    // Chat panel methods (MVI pattern)
    // ========================================================================

    pub fn chat_panel(&self) -> &ChatPanelState {
        &self.chat_panel
    }

    pub fn chat_online(&self) -> bool {
        self.chat_online
    }

    pub fn dispatch_chat(&mut self, intent: ChatIntent) {
        dispatch_mvi!(self, chat_panel, ChatReducer, intent);
    }

    pub fn open_chat(&mut self) {
        self.dispatch_chat(ChatIntent::Open);
    }

    pub fn close_chat(&mut self) {
        self.dispatch_chat(ChatIntent::Close);
    }

    /// Submit the input line. Returns the request to send when a new
    /// question was accepted.
    pub fn submit_chat(&mut self) -> Option<ChatRequest> {
        let before = self.chat_panel.pending();
        self.dispatch_chat(ChatIntent::Submit);
        let request_id = self.chat_panel.pending().filter(|id| before != Some(*id))?;
        let message = self.chat_panel.last_question()?.to_string();
        Some(ChatRequest {
            request_id,
            message,
            context: format!(
                "The visitor is currently viewing the {} section.",
                self.section.title()
            ),
        })
    }

    pub fn on_chat_reply(&mut self, request_id: u64, reply: String) {
        self.dispatch_chat(ChatIntent::ReplyReceived { request_id, reply });
    }

    fn carousel_mut(&mut self, section: Section) -> Option<&mut dyn Rotating> {
        match section {
            Section::Quotes => Some(&mut self.quotes),
            Section::Projects => Some(&mut self.projects),
            Section::Skills => Some(&mut self.skills),
            Section::Hero | Section::Contact => None,
        }
    }
}
