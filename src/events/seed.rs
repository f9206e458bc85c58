//! Built-in demo events shown alongside user-created ones.

use crate::db::models::Event;
use chrono::Utc;

struct DemoEvent {
    id: &'static str,
    name: &'static str,
    event_type: &'static str,
    format: &'static str,
    skill_level: &'static str,
    event_date: &'static str,
    start_time: &'static str,
    end_time: &'static str,
    registration_deadline: &'static str,
    min_rating: f64,
    max_rating: f64,
    entry_fee_usdc: f64,
    max_participants: i32,
    seed_participants: i32,
    location: &'static str,
    description: &'static str,
    image_url: &'static str,
}

const DEMO_EVENTS: &[DemoEvent] = &[
    DemoEvent {
        id: "1",
        name: "Pro Mixed Doubles Round Robin",
        event_type: "roundRobin",
        format: "mixed",
        skill_level: "4.5+",
        event_date: "2024-03-15",
        start_time: "09:00",
        end_time: "14:00",
        registration_deadline: "2024-03-10",
        min_rating: 4.5,
        max_rating: 6.0,
        entry_fee_usdc: 75.0,
        max_participants: 24,
        seed_participants: 16,
        location: "Main Street Pickleball Club",
        description: "Professional level mixed doubles tournament with guaranteed 6 games",
        image_url: "/images/mixed-doubles.jpg",
    },
    DemoEvent {
        id: "2",
        name: "Intermediate Doubles Ladder",
        event_type: "ladder",
        format: "doubles",
        skill_level: "3.5-4.0",
        event_date: "2024-04-01",
        start_time: "18:00",
        end_time: "21:00",
        registration_deadline: "2024-03-25",
        min_rating: 3.5,
        max_rating: 4.0,
        entry_fee_usdc: 40.0,
        max_participants: 32,
        seed_participants: 22,
        location: "Indoor Pickleball Zone",
        description: "Weekly doubles ladder for intermediate players. Play multiple matches and move up/down the ladder.",
        image_url: "/images/double-ladder.jpg",
    },
    DemoEvent {
        id: "3",
        name: "Beginner Friendly Social",
        event_type: "social",
        format: "mixed",
        skill_level: "2.5-3.0",
        event_date: "2024-05-08",
        start_time: "10:00",
        end_time: "13:00",
        registration_deadline: "2024-05-06",
        min_rating: 2.5,
        max_rating: 3.0,
        entry_fee_usdc: 25.0,
        max_participants: 20,
        seed_participants: 8,
        location: "Community Center Courts",
        description: "Fun social event for beginners. Includes basic instruction and organized play.",
        image_url: "/images/beginner-social.jpg",
    },
    DemoEvent {
        id: "4",
        name: "Advanced Singles Championship",
        event_type: "bracket",
        format: "singles",
        skill_level: "4.0-4.5",
        event_date: "2024-06-01",
        start_time: "08:00",
        end_time: "17:00",
        registration_deadline: "2024-05-25",
        min_rating: 4.0,
        max_rating: 4.5,
        entry_fee_usdc: 60.0,
        max_participants: 32,
        seed_participants: 12,
        location: "Championship Courts",
        description: "Single elimination tournament with consolation bracket. Medals for top 3 finishers.",
        image_url: "/images/singles-championship.jpg",
    },
    DemoEvent {
        id: "5",
        name: "Mixed Skills Round Robin",
        event_type: "roundRobin",
        format: "mixed",
        skill_level: "3.0-3.5",
        event_date: "2024-03-22",
        start_time: "16:00",
        end_time: "20:00",
        registration_deadline: "2024-03-18",
        min_rating: 3.0,
        max_rating: 3.5,
        entry_fee_usdc: 35.0,
        max_participants: 24,
        seed_participants: 18,
        location: "Sunset Pickleball Complex",
        description: "Evening round robin with rotating partners. Great for meeting new players!",
        image_url: "/images/mixed-skills.jpg",
    },
    DemoEvent {
        id: "6",
        name: "Ladies Doubles Social",
        event_type: "social",
        format: "doubles",
        skill_level: "3.0-3.5",
        event_date: "2024-05-29",
        start_time: "09:00",
        end_time: "12:00",
        registration_deadline: "2024-05-25",
        min_rating: 3.0,
        max_rating: 3.5,
        entry_fee_usdc: 30.0,
        max_participants: 24,
        seed_participants: 14,
        location: "Riverside Recreation Center",
        description: "Ladies-only doubles social event. All skill levels welcome within rating range.",
        image_url: "/images/ladies-doubles.jpg",
    },
    DemoEvent {
        id: "7",
        name: "Pro Singles Shootout",
        event_type: "bracket",
        format: "singles",
        skill_level: "4.5+",
        event_date: "2024-06-15",
        start_time: "08:00",
        end_time: "18:00",
        registration_deadline: "2024-06-10",
        min_rating: 4.5,
        max_rating: 6.0,
        entry_fee_usdc: 100.0,
        max_participants: 32,
        seed_participants: 8,
        location: "Elite Pickleball Academy",
        description: "High-stakes professional singles tournament with cash prizes.",
        image_url: "/images/pro-singles.jpg",
    },
    DemoEvent {
        id: "8",
        name: "Youth Development Series",
        event_type: "roundRobin",
        format: "mixed",
        skill_level: "2.5-3.0",
        event_date: "2024-03-08",
        start_time: "14:00",
        end_time: "17:00",
        registration_deadline: "2024-03-05",
        min_rating: 2.5,
        max_rating: 3.0,
        entry_fee_usdc: 20.0,
        max_participants: 16,
        seed_participants: 6,
        location: "Community Youth Center",
        description: "Youth-focused tournament with coaching and skill development.",
        image_url: "/images/youth-series.jpg",
    },
];

pub(super) fn demo_events() -> Vec<Event> {
    DEMO_EVENTS
        .iter()
        .map(|demo| Event {
            id: demo.id.to_string(),
            name: demo.name.to_string(),
            event_type: demo.event_type.to_string(),
            format: demo.format.to_string(),
            skill_level: demo.skill_level.to_string(),
            event_date: demo.event_date.to_string(),
            start_time: demo.start_time.to_string(),
            end_time: demo.end_time.to_string(),
            registration_deadline: demo.registration_deadline.to_string(),
            min_rating: demo.min_rating,
            max_rating: demo.max_rating,
            entry_fee_usdc: demo.entry_fee_usdc,
            max_participants: demo.max_participants,
            seed_participants: demo.seed_participants,
            location: demo.location.to_string(),
            description: Some(demo.description.to_string()),
            image_url: Some(demo.image_url.to_string()),
            created_by: "system".to_string(),
            created_at: Utc::now().to_rfc3339(),
        })
        .collect()
}
