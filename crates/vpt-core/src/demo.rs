//! Demonstration entries a fresh dashboard starts with.

use vpt_model::{Entry, EntryId, Status};

use crate::store::EntryStore;

struct DemoRow {
    id: &'static str,
    date: &'static str,
    athlete: &'static str,
    title: &'static str,
    shooter: &'static str,
    editor: &'static str,
    description: &'static str,
    status: Status,
    link_url: &'static str,
    created_at: &'static str,
}

const DEMO_ROWS: [DemoRow; 10] = [
    DemoRow {
        id: "1",
        date: "2024-03-15",
        athlete: "Alex Thompson",
        title: "Park Run - Finals Highlights",
        shooter: "Liam",
        editor: "Marcus Chen",
        description:
            "Finals day highlights package featuring multiple angles and slow motion shots",
        status: Status::Published,
        link_url: "https://example.com/video1",
        created_at: "2024-03-15T10:00:00Z",
    },
    DemoRow {
        id: "2",
        date: "2024-03-14",
        athlete: "Jordan Lee",
        title: "Training Session - New Tricks",
        shooter: "Nathan Reed",
        editor: "Sophia Martinez",
        description: "Capturing new trick progression during morning training session",
        status: Status::InProgress,
        link_url: "",
        created_at: "2024-03-14T09:30:00Z",
    },
    DemoRow {
        id: "3",
        date: "2024-03-13",
        athlete: "Sam Parker",
        title: "Competition Run 1",
        shooter: "Ethan Brooks",
        editor: "Isabella Kim",
        description: "First competition run with multiple angles",
        status: Status::Completed,
        link_url: "https://example.com/video3",
        created_at: "2024-03-13T15:20:00Z",
    },
    DemoRow {
        id: "4",
        date: "2024-03-13",
        athlete: "Morgan Chen",
        title: "Style Session",
        shooter: "Liam",
        editor: "Oliver Wright",
        description: "Evening style session with sunset lighting",
        status: Status::InProgress,
        link_url: "",
        created_at: "2024-03-13T19:45:00Z",
    },
    DemoRow {
        id: "5",
        date: "2024-03-12",
        athlete: "Chris Rodriguez",
        title: "Rail Feature",
        shooter: "Lucas Taylor",
        editor: "Ava Wilson",
        description: "Technical rail section with multiple angles",
        status: Status::Completed,
        link_url: "https://example.com/video5",
        created_at: "2024-03-12T14:30:00Z",
    },
    DemoRow {
        id: "6",
        date: "2024-03-12",
        athlete: "Pat Johnson",
        title: "Jump Line Progression",
        shooter: "Liam",
        editor: "Sophia Martinez",
        description: "Full jump line progression with follow cam",
        status: Status::Published,
        link_url: "https://example.com/video6",
        created_at: "2024-03-12T11:15:00Z",
    },
    DemoRow {
        id: "7",
        date: "2024-03-11",
        athlete: "Jamie Wilson",
        title: "Feature Highlight",
        shooter: "Multiple",
        editor: "Marcus Chen",
        description: "Multiple angles of new feature with drone shots",
        status: Status::InProgress,
        link_url: "",
        created_at: "2024-03-11T16:20:00Z",
    },
    DemoRow {
        id: "8",
        date: "2024-03-11",
        athlete: "Casey Martinez",
        title: "Powder Day Edit",
        shooter: "Nathan Reed",
        editor: "Isabella Kim",
        description: "Deep powder shots with cinematic angles",
        status: Status::Completed,
        link_url: "https://example.com/video8",
        created_at: "2024-03-11T08:45:00Z",
    },
    DemoRow {
        id: "9",
        date: "2024-03-10",
        athlete: "Robin Zhang",
        title: "Urban Session",
        shooter: "Ethan Brooks",
        editor: "Oliver Wright",
        description: "Night urban session with creative lighting",
        status: Status::Published,
        link_url: "https://example.com/video9",
        created_at: "2024-03-10T20:30:00Z",
    },
    DemoRow {
        id: "10",
        date: "2024-03-10",
        athlete: "Drew Anderson",
        title: "Competition Prep",
        shooter: "Liam",
        editor: "Ava Wilson",
        description: "Pre-competition practice runs and trick prep",
        status: Status::InProgress,
        link_url: "",
        created_at: "2024-03-10T13:15:00Z",
    },
];

pub fn demo_entries() -> Vec<Entry> {
    DEMO_ROWS
        .iter()
        .map(|row| Entry {
            id: EntryId::new(row.id),
            date: row.date.to_string(),
            athlete: row.athlete.to_string(),
            title: row.title.to_string(),
            shooter: row.shooter.to_string(),
            editor: row.editor.to_string(),
            description: row.description.to_string(),
            status: row.status,
            link_url: row.link_url.to_string(),
            created_at: row.created_at.to_string(),
        })
        .collect()
}

impl EntryStore {
    /// Store pre-loaded with the demonstration entries.
    pub fn demo() -> Self {
        // Demo ids are distinct literals.
        Self::with_entries(demo_entries()).unwrap_or_default()
    }
}
