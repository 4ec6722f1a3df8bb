/// Coaching team dataset

/// A member of the club's coaching and management team.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamMember {
    pub id: u32,
    pub name: &'static str,
    pub position: &'static str,
    /// Asset path relative to the assets root
    pub image: &'static str,
    pub bio: &'static str,
    pub specialties: [&'static str; 2],
}

pub static TEAM_MEMBERS: [TeamMember; 4] = [
    TeamMember {
        id: 1,
        name: "Samuel Osei",
        position: "Club Director",
        image: "sports/team1.jpg",
        bio: "Samuel has over 15 years of experience in sports management and has \
            successfully led multiple sports clubs to national recognition.",
        specialties: ["Sports Management", "Strategic Planning"],
    },
    TeamMember {
        id: 2,
        name: "Grace Adepa",
        position: "Head Basketball Coach",
        image: "sports/team2.jpg",
        bio: "A former national basketball champion, Grace brings her extensive \
            experience and passion for the sport to develop high-performing athletes.",
        specialties: ["Player Development", "Team Building"],
    },
    TeamMember {
        id: 3,
        name: "Daniel Mensah",
        position: "Head Tennis Coach",
        image: "sports/team3.jpg",
        bio: "Daniel is an ITF-certified tennis coach with experience coaching youth \
            and professional teams across Ghana and Europe.",
        specialties: ["Technical Training", "Youth Development"],
    },
    TeamMember {
        id: 4,
        name: "Abena Kusi",
        position: "Youth Program Coordinator",
        image: "sports/team4.jpg",
        bio: "Abena specializes in youth sports development and has created innovative \
            programs that nurture young talent from grassroots to professional levels.",
        specialties: ["Multi-Sport Development", "Physical Literacy"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in TEAM_MEMBERS.iter().enumerate() {
            for b in &TEAM_MEMBERS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
