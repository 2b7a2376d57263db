pub const HEADLINE: &str = "Because Work\nShould Be More\nThan Just Work!";

pub struct Stat {
    pub number: &'static str,
    pub text: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { number: "10+", text: "Teams Engaged" },
    Stat { number: "80%", text: "Positive Response" },
    Stat { number: "90%", text: "Participation Rate" },
    Stat { number: "100+", text: "Activities Designed" },
];

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🎮",
        title: "Team Building Games",
        description: "From problem-solving challenges to outdoor adventures, our interactive Team Building games are designed to strengthen communication, trust, and collaboration.",
    },
    Service {
        icon: "🧘",
        title: "Wellness Programs",
        description: "With a strong focus on physical and mental health, our wellness programs include activities such as Yoga Classes, Mindfulness Workshops, and Fitness Challenges to help employees manage stress and stay energized.",
    },
    Service {
        icon: "🎨",
        title: "Creative Workshops",
        description: "Unlock your team's creative potential with our hands-on workshops. Whether it's Canvas Painting or Clay Modelling, our sessions are crafted to inspire creative solutions and fresh perspectives.",
    },
    Service {
        icon: "🏆",
        title: "Sports Tournaments",
        description: "Foster a healthy competitive spirit with our sports event activities. From Company Sports Days and Office Olympics to Friendly Tournaments, we create experiences that unite teams and build camaraderie.",
    },
    Service {
        icon: "🎭",
        title: "Entertainment Events",
        description: "Our live entertainment events provide fun and engaging ways for employees to bond and relax, promoting a healthy work-life balance and creating lasting memories.",
    },
    Service {
        icon: "🌱",
        title: "Corporate Social Responsibility",
        description: "Empower your workforce to give back. Our CSR programs facilitate environmental sustainability projects, and community outreach initiatives that not only benefit society but also build a sense of purpose within your team.",
    },
    Service {
        icon: "🏖️",
        title: "Offsite Retreats",
        description: "Our offsite retreats combine professional development with recreational activities, providing a refreshing change of scenery that fuels creativity and team spirit.",
    },
];

/// Services listed in the footer.
pub const FOOTER_SERVICES: usize = 3;

/// Stagger between consecutive service cards, in seconds.
pub const SERVICE_STAGGER: f64 = 0.2;
/// Stagger between consecutive stat cards, in seconds.
pub const STAT_STAGGER: f64 = 0.1;

/// `tel:` href for a display-formatted phone number.
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tel_href_strips_formatting() {
        assert_eq!(tel_href("+91 9137849313"), "tel:+919137849313");
        assert_eq!(tel_href("(022) 555-0101"), "tel:0225550101");
    }

    #[test]
    fn test_footer_services_exist() {
        assert!(FOOTER_SERVICES <= SERVICES.len());
    }
}
