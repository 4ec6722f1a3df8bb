/// Training programs dataset
///
/// Six programs shown as tabs on the Programs page. The tab order
/// follows `PROGRAMS` itself.

/// A training program offered by the club.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Program {
    pub id: u32,
    /// Short label for the tab switcher
    pub tab_label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
    pub schedule: &'static str,
    /// Asset path relative to the assets root
    pub image: &'static str,
}

pub static PROGRAMS: [Program; 6] = [
    Program {
        id: 1,
        tab_label: "Basketball",
        title: "Basketball Program",
        description: "Our basketball program offers comprehensive training for players \
            of all levels. From fundamentals to advanced techniques, our FIBA-certified \
            coaches provide expert instruction in dribbling, shooting, defense, and \
            game strategy.",
        features: [
            "Professional coaching by former national team players",
            "Training for all skill levels - beginners to elite",
            "3-on-3 and 5-on-5 leagues and competitions",
            "Specialized clinics for skills development",
        ],
        schedule: "Mon, Wed, Fri | 6:00 AM - 8:00 AM & 4:00 PM - 7:00 PM",
        image: "sports/team1.jpg",
    },
    Program {
        id: 2,
        tab_label: "Tennis",
        title: "Tennis Program",
        description: "Develop your tennis skills on our professional courts with \
            programs designed for all ages and ability levels. Our ITF-certified \
            coaches provide technical instruction, strategic guidance, and competitive \
            opportunities.",
        features: [
            "Individual and group lessons available",
            "Junior development pathway program",
            "Regular in-house tournaments and ladder competitions",
            "Advanced coaching for competitive players",
        ],
        schedule: "Tue, Thu, Sat | 7:00 AM - 9:00 AM & 3:00 PM - 6:00 PM",
        image: "sports/team2.jpg",
    },
    Program {
        id: 3,
        tab_label: "Swimming",
        title: "Swimming Program",
        description: "Our swimming program offers instruction for all ages and \
            abilities in our Olympic-size pool. Learn proper technique, build \
            endurance, and improve your performance with our certified swim coaches.",
        features: [
            "Beginner, intermediate, and advanced classes",
            "Competitive swim team training",
            "Water safety and lifeguard training",
            "Specialized stroke technique clinics",
        ],
        schedule: "Tue, Thu, Sat | 6:00 AM - 8:00 AM & 4:00 PM - 6:00 PM",
        image: "sports/team3.jpg",
    },
    Program {
        id: 4,
        tab_label: "Volleyball",
        title: "Volleyball Program",
        description: "Join our dynamic volleyball program offering training in both \
            indoor and beach volleyball formats. Focus on fundamentals, advanced \
            techniques, and competitive play with our experienced coaches.",
        features: [
            "Indoor and beach volleyball training",
            "Regular practice games and scrimmages",
            "Specialized position-specific training",
            "Seasonal competitive leagues",
        ],
        schedule: "Mon, Wed, Fri | 3:00 PM - 6:00 PM & Sat 10:00 AM - 1:00 PM",
        image: "sports/team4.jpg",
    },
    Program {
        id: 5,
        tab_label: "Fitness",
        title: "Fitness & Conditioning",
        description: "Our comprehensive fitness program offers personalized training \
            plans, group classes, and sports-specific conditioning. Build strength, \
            improve cardiovascular health, and enhance athletic performance.",
        features: [
            "Personal training with certified fitness professionals",
            "Group fitness classes including HIIT, yoga, and Pilates",
            "Sports-specific strength and conditioning",
            "Nutrition guidance and wellness planning",
        ],
        schedule: "Mon-Sat | 6:00 AM - 8:00 PM (Various classes throughout the day)",
        image: "sports/facility1.jpg",
    },
    Program {
        id: 6,
        tab_label: "Youth Academy",
        title: "Youth Academy",
        description: "Our Youth Academy provides age-appropriate sports development \
            programs for children and teenagers. Through multiple sports disciplines, \
            we focus on fundamental movement skills, sport-specific techniques, and \
            character development.",
        features: [
            "Multi-sport programs for ages 5-16",
            "Developmentally appropriate coaching methods",
            "Focus on fundamental movement skills and sports basics",
            "Character development through sports participation",
        ],
        schedule: "Mon-Fri | 3:30 PM - 5:30 PM & Sat 9:00 AM - 12:00 PM",
        image: "sports/facility2.jpg",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in PROGRAMS.iter().enumerate() {
            for b in &PROGRAMS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_tab_labels_are_distinct() {
        for (i, a) in PROGRAMS.iter().enumerate() {
            for b in &PROGRAMS[i + 1..] {
                assert_ne!(a.tab_label, b.tab_label);
            }
        }
    }
}
