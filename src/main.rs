use std::collections::HashMap;

use chrono::NaiveDate;
use iced::widget::{column, scrollable};
use iced::{event, keyboard, window, Element, Length, Size, Subscription, Task, Theme};

mod content;
mod media;
mod state;
mod ui;

use content::events::{event_by_id, EventCategory, EVENTS};
use content::gallery::{featured_images, GalleryCategory, GalleryImage, GALLERY_IMAGES};
use content::programs::PROGRAMS;
use content::team::TEAM_MEMBERS;
use content::{filter_items, CategoryFilter};
use media::assets::AssetIndex;
use media::{loader, ImageState};
use state::contact::ContactForm;
use state::navigation::Direction;
use state::viewer::{ScrollLock, Viewer};
use state::window::WindowState;

/// Header bar switches to its scrolled style past this offset.
const SCROLL_THRESHOLD: f32 = 10.0;

/// Pages reachable from the header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Gallery,
    Events,
    Programs,
    Team,
    Contact,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Gallery,
        Page::Events,
        Page::Programs,
        Page::Team,
        Page::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Page::Gallery => "Gallery",
            Page::Events => "Events",
            Page::Programs => "Programs",
            Page::Team => "Team",
            Page::Contact => "Contact",
        }
    }
}

/// Which list a gallery photo was opened from. The lightbox navigates
/// that same list until it is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryOrigin {
    Grid,
    Featured,
}

/// Main application state
pub struct App {
    pub page: Page,
    /// Index of the on-disk assets folder, built once at startup
    assets: AssetIndex,
    /// Grid thumbnail per content reference
    thumbs: HashMap<&'static str, ImageState>,
    /// Full-size image per content reference, loaded on first open
    full: HashMap<&'static str, ImageState>,
    pub gallery_filter: CategoryFilter<GalleryCategory>,
    pub lightbox: Viewer<&'static GalleryImage>,
    pub event_filter: CategoryFilter<EventCategory>,
    pub event_modal: Viewer<&'static content::events::Event>,
    pub active_program: usize,
    pub contact: ContactForm,
    pub newsletter_email: String,
    pub subscribed: bool,
    scroll_lock: ScrollLock,
    scroll_offset: f32,
    window: WindowState,
    /// Status message to display in the footer
    pub status: String,
    /// Captured once at startup; used to label past events
    pub today: NaiveDate,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Page),
    PageScrolled(f32),

    GalleryFilterSelected(CategoryFilter<GalleryCategory>),
    GalleryImageOpened { id: u32, origin: GalleryOrigin },
    LightboxNavigated(Direction),

    EventFilterSelected(CategoryFilter<EventCategory>),
    EventOpened(u32),

    /// Backdrop click or ✕ on whichever overlay is open
    OverlayClosed,
    EscapePressed,
    ArrowKeyPressed(Direction),

    ProgramSelected(usize),

    ThumbnailLoaded(&'static str, Result<iced::widget::image::Handle, loader::LoadError>),
    FullImageLoaded(&'static str, Result<iced::widget::image::Handle, loader::LoadError>),

    ContactNameChanged(String),
    ContactEmailChanged(String),
    ContactPhoneChanged(String),
    ContactMessageChanged(String),
    ContactSubmitted,

    NewsletterEmailChanged(String),
    NewsletterSubscribed,
    SubscribeBannerElapsed,

    WindowResized(Size),
    CloseRequested(window::Id),
}

impl App {
    /// Create the application and kick off thumbnail loading for every
    /// asset the content set references.
    fn new() -> (Self, Task<Message>) {
        let assets = AssetIndex::scan(&media::assets::default_root());
        let today = chrono::Local::now().date_naive();

        println!(
            "🏟️  Osuele Sports Club initialized with {} assets",
            assets.len()
        );

        let status = format!("Ready. {} assets indexed.", assets.len());

        let mut app = App {
            page: Page::Gallery,
            assets,
            thumbs: HashMap::new(),
            full: HashMap::new(),
            gallery_filter: CategoryFilter::All,
            lightbox: Viewer::new(),
            event_filter: CategoryFilter::All,
            event_modal: Viewer::new(),
            active_program: 0,
            contact: ContactForm::default(),
            newsletter_email: String::new(),
            subscribed: false,
            scroll_lock: ScrollLock::new(),
            scroll_offset: 0.0,
            window: WindowState::load(),
            status,
            today,
        };

        let mut loads = Vec::new();
        for source in referenced_sources() {
            if app.thumbs.contains_key(source) {
                continue;
            }
            app.thumbs.insert(source, ImageState::Loading);
            let resolved = app.assets.resolve(source);
            loads.push(Task::perform(
                loader::load_thumbnail(resolved, source.to_string()),
                move |result| Message::ThumbnailLoaded(source, result),
            ));
        }

        (app, Task::batch(loads))
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(page) => {
                // Leaving a page closes whatever overlay it had open, so
                // the scroll lock cannot outlive the page that took it
                self.lightbox.close(&mut self.scroll_lock);
                self.event_modal.close(&mut self.scroll_lock);
                self.page = page;
                self.scroll_offset = 0.0;
                scrollable::scroll_to(scroll_id(), scrollable::AbsoluteOffset::default())
            }
            Message::PageScrolled(offset) => {
                self.scroll_offset = offset;
                Task::none()
            }

            Message::GalleryFilterSelected(filter) => {
                self.gallery_filter = filter;
                Task::none()
            }
            Message::GalleryImageOpened { id, origin } => self.open_lightbox(id, origin),
            Message::LightboxNavigated(direction) | Message::ArrowKeyPressed(direction) => {
                if !self.lightbox.is_open() {
                    return Task::none();
                }
                self.lightbox.advance(direction);
                match self.lightbox.current() {
                    Some((image, _)) => self.ensure_full(image.source),
                    None => Task::none(),
                }
            }

            Message::EventFilterSelected(filter) => {
                self.event_filter = filter;
                Task::none()
            }
            Message::EventOpened(id) => {
                let Some(event) = event_by_id(id) else {
                    return Task::none();
                };
                self.event_modal.open(vec![event], 0, &mut self.scroll_lock);
                self.ensure_full(event.image)
            }

            Message::OverlayClosed | Message::EscapePressed => {
                self.lightbox.close(&mut self.scroll_lock);
                self.event_modal.close(&mut self.scroll_lock);
                Task::none()
            }

            Message::ProgramSelected(index) => {
                if index < PROGRAMS.len() {
                    self.active_program = index;
                }
                Task::none()
            }

            Message::ThumbnailLoaded(source, result) => {
                self.thumbs.insert(source, settle(source, result));
                Task::none()
            }
            Message::FullImageLoaded(source, result) => {
                self.full.insert(source, settle(source, result));
                Task::none()
            }

            Message::ContactNameChanged(value) => {
                self.contact.name = value;
                Task::none()
            }
            Message::ContactEmailChanged(value) => {
                self.contact.email = value;
                Task::none()
            }
            Message::ContactPhoneChanged(value) => {
                self.contact.phone = value;
                Task::none()
            }
            Message::ContactMessageChanged(value) => {
                self.contact.message = value;
                Task::none()
            }
            Message::ContactSubmitted => {
                if self.contact.submit() {
                    println!("📨 Contact form submitted");
                    self.status = "Message sent. We will get back to you shortly.".to_string();
                }
                Task::none()
            }

            Message::NewsletterEmailChanged(value) => {
                self.newsletter_email = value;
                Task::none()
            }
            Message::NewsletterSubscribed => {
                if !state::contact::is_valid_email(self.newsletter_email.trim()) {
                    return Task::none();
                }
                self.newsletter_email.clear();
                self.subscribed = true;
                Task::perform(
                    tokio::time::sleep(std::time::Duration::from_secs(3)),
                    |_| Message::SubscribeBannerElapsed,
                )
            }
            Message::SubscribeBannerElapsed => {
                self.subscribed = false;
                Task::none()
            }

            Message::WindowResized(size) => {
                self.window = WindowState {
                    width: size.width,
                    height: size.height,
                };
                Task::none()
            }
            Message::CloseRequested(id) => {
                match self.window.save() {
                    Ok(()) => println!("💾 Window state saved"),
                    Err(e) => eprintln!("⚠️  Failed to save window state: {}", e),
                }
                window::close(id)
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let page: Element<'_, Message> = match self.page {
            Page::Gallery => ui::gallery::view(self),
            Page::Events => ui::events::view(self),
            Page::Programs => ui::programs::view(self),
            Page::Team => ui::team::view(self),
            Page::Contact => ui::contact::view(self),
        };

        let body = scrollable(column![page, ui::contact::footer(self)])
            .id(scroll_id())
            .on_scroll(|viewport| Message::PageScrolled(viewport.absolute_offset().y))
            .width(Length::Fill)
            .height(Length::Fill);

        let base = column![ui::header::view(self), body];

        if self.lightbox.is_open() {
            ui::modal(base, ui::gallery::lightbox(self), Message::OverlayClosed)
        } else if self.event_modal.is_open() {
            ui::modal(base, ui::events::detail(self), Message::OverlayClosed)
        } else {
            base.into()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        ui::theme::theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let keys = keyboard::on_key_press(|key, _modifiers| match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::EscapePressed),
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                Some(Message::ArrowKeyPressed(Direction::Next))
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                Some(Message::ArrowKeyPressed(Direction::Prev))
            }
            _ => None,
        });

        let window_events = event::listen_with(|event, _status, id| match event {
            iced::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            iced::Event::Window(window::Event::CloseRequested) => {
                Some(Message::CloseRequested(id))
            }
            _ => None,
        });

        Subscription::batch([keys, window_events])
    }

    /// Whether the page has scrolled past the top.
    pub fn is_scrolled(&self) -> bool {
        self.scroll_offset > SCROLL_THRESHOLD
    }

    /// Thumbnail state for a content reference, if requested yet.
    pub fn thumb_state(&self, source: &str) -> Option<&ImageState> {
        self.thumbs.get(source)
    }

    /// Full-size image state for a content reference, if requested yet.
    pub fn full_state(&self, source: &str) -> Option<&ImageState> {
        self.full.get(source)
    }

    /// Open the lightbox on the photo with `id`, navigating the list it
    /// was clicked in.
    fn open_lightbox(&mut self, id: u32, origin: GalleryOrigin) -> Task<Message> {
        let sequence: Vec<&'static GalleryImage> = match origin {
            GalleryOrigin::Grid => filter_items(&GALLERY_IMAGES, self.gallery_filter),
            GalleryOrigin::Featured => featured_images(),
        };

        let Some(index) = sequence.iter().position(|image| image.id == id) else {
            return Task::none();
        };

        let source = sequence[index].source;
        self.lightbox.open(sequence, index, &mut self.scroll_lock);
        self.ensure_full(source)
    }

    /// Start loading the full-size asset unless it already is.
    fn ensure_full(&mut self, source: &'static str) -> Task<Message> {
        if self.full.contains_key(source) {
            return Task::none();
        }
        self.full.insert(source, ImageState::Loading);

        let resolved = self.assets.resolve(source);
        Task::perform(loader::load_full(resolved, source.to_string()), move |result| {
            Message::FullImageLoaded(source, result)
        })
    }
}

/// Collapse a load result into the view-facing image state.
fn settle(
    source: &str,
    result: Result<iced::widget::image::Handle, loader::LoadError>,
) -> ImageState {
    match result {
        Ok(handle) => ImageState::Ready(handle),
        Err(error) => {
            eprintln!("⚠️  {} ({})", error, source);
            ImageState::Failed
        }
    }
}

/// Every asset the content set references, duplicates included.
fn referenced_sources() -> impl Iterator<Item = &'static str> {
    GALLERY_IMAGES
        .iter()
        .map(|image| image.source)
        .chain(EVENTS.iter().map(|event| event.image))
        .chain(TEAM_MEMBERS.iter().map(|member| member.image))
        .chain(PROGRAMS.iter().map(|program| program.image))
}

fn scroll_id() -> scrollable::Id {
    scrollable::Id::new("page-scroll")
}

fn main() -> iced::Result {
    let window_state = WindowState::load();

    iced::application("Osuele Sports Club", App::update, App::view)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window::Settings {
            size: window_state.size(),
            exit_on_close_request: false,
            ..window::Settings::default()
        })
        .centered()
        .run_with(App::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new().0
    }

    #[test]
    fn test_swimming_filter_lightbox_navigation() {
        let mut app = app();

        let _ = app.update(Message::GalleryFilterSelected(CategoryFilter::Only(
            GalleryCategory::Swimming,
        )));

        let swimming = filter_items(&GALLERY_IMAGES, app.gallery_filter);
        assert_eq!(swimming.len(), 2);
        let first = swimming[0].id;
        let second = swimming[1].id;

        let _ = app.update(Message::GalleryImageOpened {
            id: first,
            origin: GalleryOrigin::Grid,
        });
        assert_eq!(app.lightbox.current().map(|(i, _)| i.id), Some(first));

        // Next reaches the second swimming photo, next again wraps back
        let _ = app.update(Message::LightboxNavigated(Direction::Next));
        assert_eq!(app.lightbox.current().map(|(i, _)| i.id), Some(second));
        let _ = app.update(Message::LightboxNavigated(Direction::Next));
        assert_eq!(app.lightbox.current().map(|(i, _)| i.id), Some(first));
    }

    #[test]
    fn test_escape_closes_and_unlocks_scroll() {
        let mut app = app();

        let _ = app.update(Message::GalleryImageOpened {
            id: 1,
            origin: GalleryOrigin::Grid,
        });
        assert!(app.lightbox.is_open());
        assert!(app.scroll_lock.locked());

        let _ = app.update(Message::EscapePressed);
        assert!(!app.lightbox.is_open());
        assert!(!app.scroll_lock.locked());
    }

    #[test]
    fn test_double_open_replaces_without_stacking() {
        let mut app = app();

        let _ = app.update(Message::GalleryImageOpened {
            id: 1,
            origin: GalleryOrigin::Grid,
        });
        let _ = app.update(Message::GalleryImageOpened {
            id: 4,
            origin: GalleryOrigin::Grid,
        });

        assert_eq!(app.lightbox.current().map(|(i, _)| i.id), Some(4));
        assert_eq!(app.scroll_lock.holds(), 1);
    }

    #[test]
    fn test_close_with_nothing_open_is_noop() {
        let mut app = app();

        let _ = app.update(Message::OverlayClosed);
        assert!(!app.lightbox.is_open());
        assert!(!app.event_modal.is_open());
        assert!(!app.scroll_lock.locked());
    }

    #[test]
    fn test_featured_origin_navigates_featured_subset() {
        let mut app = app();
        let featured = featured_images();

        let _ = app.update(Message::GalleryImageOpened {
            id: featured[0].id,
            origin: GalleryOrigin::Featured,
        });
        assert_eq!(app.lightbox.sequence_len(), featured.len());

        // Prev from the first featured photo wraps to the last
        let _ = app.update(Message::LightboxNavigated(Direction::Prev));
        let last = featured[featured.len() - 1].id;
        assert_eq!(app.lightbox.current().map(|(i, _)| i.id), Some(last));
    }

    #[test]
    fn test_arrow_keys_ignored_while_closed() {
        let mut app = app();

        let _ = app.update(Message::ArrowKeyPressed(Direction::Next));
        assert!(app.lightbox.current().is_none());
    }

    #[test]
    fn test_navigating_away_releases_scroll_lock() {
        let mut app = app();

        let _ = app.update(Message::GalleryImageOpened {
            id: 1,
            origin: GalleryOrigin::Grid,
        });
        assert!(app.scroll_lock.locked());

        let _ = app.update(Message::Navigate(Page::Events));
        assert!(!app.lightbox.is_open());
        assert!(!app.scroll_lock.locked());
    }

    #[test]
    fn test_event_modal_shares_scroll_lock() {
        let mut app = app();

        let _ = app.update(Message::EventOpened(1));
        assert!(app.event_modal.is_open());
        assert!(app.scroll_lock.locked());

        let _ = app.update(Message::OverlayClosed);
        assert!(!app.scroll_lock.locked());
    }

    #[tokio::test]
    async fn test_newsletter_banner_requires_valid_email() {
        let mut app = app();

        let _ = app.update(Message::NewsletterEmailChanged("not-an-email".into()));
        let _ = app.update(Message::NewsletterSubscribed);
        assert!(!app.subscribed);

        let _ = app.update(Message::NewsletterEmailChanged("fan@osuele.com".into()));
        let _ = app.update(Message::NewsletterSubscribed);
        assert!(app.subscribed);
        assert!(app.newsletter_email.is_empty());

        let _ = app.update(Message::SubscribeBannerElapsed);
        assert!(!app.subscribed);
    }
}
