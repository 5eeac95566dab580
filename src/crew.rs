//! Crew roster shown in the "your squad" section.

use serde::Serialize;

/// A squad member.
#[derive(Debug, Clone, Serialize)]
pub struct CrewMember {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    /// Emoji avatar rendered by the frontend.
    pub avatar: &'static str,
}

/// The current squad, leads first.
#[must_use]
pub fn squad() -> Vec<CrewMember> {
    vec![
        CrewMember {
            id: 1,
            name: "Alex",
            role: "Leader",
            avatar: "👨‍💼",
        },
        CrewMember {
            id: 2,
            name: "Jordan",
            role: "Co-Lead",
            avatar: "👩‍💼",
        },
        CrewMember {
            id: 3,
            name: "Sam",
            role: "Member",
            avatar: "👨‍🎓",
        },
        CrewMember {
            id: 4,
            name: "Casey",
            role: "Member",
            avatar: "👩‍🎓",
        },
        CrewMember {
            id: 5,
            name: "Morgan",
            role: "Member",
            avatar: "🧑‍🤝‍🧑",
        },
    ]
}
