/// Events calendar dataset
///
/// Tournaments, workshops, and community events hosted by the club.
/// Dates are real `chrono` dates so the UI can tell upcoming events
/// from past ones instead of comparing display strings.

use std::sync::LazyLock;

use chrono::NaiveDate;

use super::Categorized;

/// Closed set of event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    Tournament,
    Workshop,
    Community,
}

impl EventCategory {
    pub const ALL: [EventCategory; 3] = [
        EventCategory::Tournament,
        EventCategory::Workshop,
        EventCategory::Community,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EventCategory::Tournament => "Tournaments",
            EventCategory::Workshop => "Workshops",
            EventCategory::Community => "Community",
        }
    }
}

/// A single club event.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Unique, stable id within the events collection
    pub id: u32,
    pub title: &'static str,
    /// First (or only) day of the event
    pub start: NaiveDate,
    /// Last day for multi-day events
    pub end: Option<NaiveDate>,
    pub time: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    /// Asset path relative to the assets root
    pub image: &'static str,
    pub category: EventCategory,
    /// Included in the featured showcase
    pub featured: bool,
}

impl Categorized for Event {
    type Category = EventCategory;

    fn category(&self) -> EventCategory {
        self.category
    }
}

impl Event {
    /// Last day of the event (the start day for single-day events).
    pub fn last_day(&self) -> NaiveDate {
        self.end.unwrap_or(self.start)
    }

    /// Whether the event has not finished yet as of `today`.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.last_day() >= today
    }

    /// Human-readable date label, e.g. "October 15-18, 2024" for a
    /// same-month range or "August 12, 2024" for a single day.
    pub fn date_label(&self) -> String {
        match self.end {
            None => self.start.format("%B %-d, %Y").to_string(),
            Some(end) if same_month(self.start, end) => format!(
                "{}-{}",
                self.start.format("%B %-d"),
                end.format("%-d, %Y")
            ),
            Some(end) => format!(
                "{} - {}",
                self.start.format("%B %-d"),
                end.format("%B %-d, %Y")
            ),
        }
    }
}

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    use chrono::Datelike;
    a.year() == b.year() && a.month() == b.month()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("literal event date is valid")
}

pub static EVENTS: LazyLock<[Event; 6]> = LazyLock::new(|| {
    [
        Event {
            id: 1,
            title: "National Basketball Championship",
            start: date(2024, 10, 15),
            end: Some(date(2024, 10, 18)),
            time: "9:00 AM - 6:00 PM",
            location: "Osuele Sports Complex, Accra",
            description: "Our flagship basketball tournament featuring elite teams from \
                across Ghana. Experience three days of intense competition, skill \
                showcases, and community events. The championship includes both men's \
                and women's divisions with prizes for winning teams.",
            image: "sports/event1.jpg",
            category: EventCategory::Tournament,
            featured: true,
        },
        Event {
            id: 2,
            title: "Multi-Sport Youth Camp",
            start: date(2024, 7, 10),
            end: Some(date(2024, 7, 21)),
            time: "8:00 AM - 3:00 PM",
            location: "Osuele Training Grounds",
            description: "A two-week intensive sports camp for youth aged 8-16. The camp \
                focuses on skills development across basketball, tennis, swimming and \
                volleyball. Our professional coaches provide expert instruction while \
                emphasizing teamwork, sportsmanship, and character development.",
            image: "sports/event2.jpg",
            category: EventCategory::Workshop,
            featured: true,
        },
        Event {
            id: 3,
            title: "Community Fitness Challenge",
            start: date(2024, 9, 3),
            end: Some(date(2024, 9, 4)),
            time: "7:00 AM - 5:00 PM",
            location: "Osuele Fitness Center",
            description: "A weekend dedicated to fitness challenges for all levels. \
                Participants can test their strength, endurance, and agility through \
                various challenges and competitions. Join us for group workouts, \
                nutrition workshops, and fitness assessments with our certified trainers.",
            image: "sports/event3.jpg",
            category: EventCategory::Community,
            featured: true,
        },
        Event {
            id: 4,
            title: "Tennis Open Tournament",
            start: date(2024, 8, 5),
            end: Some(date(2024, 8, 7)),
            time: "8:00 AM - 6:00 PM",
            location: "Osuele Tennis Courts",
            description: "An open tennis tournament with categories for juniors, adults, \
                and seniors. All skill levels welcome with round-robin format ensuring \
                multiple matches for all participants. Professional coaching staff will \
                be present to provide tips and analysis.",
            image: "sports/facility1.jpg",
            category: EventCategory::Tournament,
            featured: false,
        },
        Event {
            id: 5,
            title: "Swimming Technique Workshop",
            start: date(2024, 6, 15),
            end: None,
            time: "10:00 AM - 2:00 PM",
            location: "Osuele Swimming Pool",
            description: "Improve your swimming technique with our specialized workshop \
                led by certified swimming coaches. Focus on stroke refinement, starts, \
                turns, and racing strategy. Video analysis included for all participants.",
            image: "sports/facility2.jpg",
            category: EventCategory::Workshop,
            featured: false,
        },
        Event {
            id: 6,
            title: "Family Sports Day",
            start: date(2024, 11, 12),
            end: None,
            time: "9:00 AM - 4:00 PM",
            location: "Osuele Sports Complex",
            description: "A day of family-friendly sports activities and competitions. \
                Activities for all ages including relay races, family challenges, and \
                mini-tournaments. Food vendors, entertainment, and prizes throughout \
                the day.",
            image: "sports/team4.jpg",
            category: EventCategory::Community,
            featured: false,
        },
    ]
});

/// Look up an event by id.
pub fn event_by_id(id: u32) -> Option<&'static Event> {
    EVENTS.iter().find(|event| event.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in EVENTS.iter().enumerate() {
            for b in &EVENTS[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate event id {}", a.id);
            }
        }
    }

    #[test]
    fn test_date_labels() {
        assert_eq!(event_by_id(1).unwrap().date_label(), "October 15-18, 2024");
        assert_eq!(event_by_id(5).unwrap().date_label(), "June 15, 2024");
        assert_eq!(event_by_id(6).unwrap().date_label(), "November 12, 2024");
    }

    #[test]
    fn test_cross_month_date_label() {
        let event = Event {
            end: Some(date(2024, 7, 2)),
            start: date(2024, 6, 28),
            ..event_by_id(1).unwrap().clone()
        };
        assert_eq!(event.date_label(), "June 28 - July 2, 2024");
    }

    #[test]
    fn test_upcoming_classification() {
        let championship = event_by_id(1).unwrap();

        // Still upcoming on its last day
        assert!(championship.is_upcoming(date(2024, 10, 18)));
        // Past the day after
        assert!(!championship.is_upcoming(date(2024, 10, 19)));
        // Single-day events use the start day
        let workshop = event_by_id(5).unwrap();
        assert!(workshop.is_upcoming(date(2024, 6, 15)));
        assert!(!workshop.is_upcoming(date(2024, 6, 16)));
    }
}
