//! Site Copy
//!
//! Static content shared by several pages.

pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const NAV_LINKS: [(&str, &str); 5] = [
    ("Home", "/"),
    ("Services", "/services"),
    ("About", "/about"),
    ("FAQ", "/faq"),
    ("Subscribe", "/subscribe"),
];

pub const TAGLINE: &str = "Hydrate, with ease.";
pub const INSTAGRAM_HANDLE: &str = "@Aquaeasedelivery";
pub const INSTAGRAM_URL: &str = "https://instagram.com/Aquaeasedelivery";

pub const SERVICES: [Card; 3] = [
    Card {
        title: "Jug delivery, always on time",
        description: "Choose weekly or biweekly water drops that fit class schedules and dorm quiet hours.",
    },
    Card {
        title: "Pure water, simplified",
        description: "Sealed water jugs delivered on repeat so you never run dry.",
    },
    Card {
        title: "Text-first coordination",
        description: "Delivery updates are handled through SMS so you never miss a handoff.",
    },
];

pub const SERVICE_DETAILS: [Card; 4] = [
    Card {
        title: "Coverage",
        description: "Residence halls, SoVi, North Lake Village, and nearby apartments.",
    },
    Card {
        title: "Windows",
        description: "Delivery windows match class schedules and quiet hours.",
    },
    Card {
        title: "Support",
        description: "Text updates before arrival with a secure handoff.",
    },
    Card {
        title: "Flex",
        description: "Adjust delivery windows with support to match your schedule.",
    },
];

pub const BENEFITS: [Card; 3] = [
    Card {
        title: "Built for campus life",
        description: "We deliver directly to residence halls, SoVi, North Lake Village, and nearby apartments.",
    },
    Card {
        title: "No heavy lifting",
        description: "AquaEase carries your water jugs, sets them down securely, and confirms pickup.",
    },
    Card {
        title: "Flexible scheduling",
        description: "Adjust delivery windows with support so drops align with class schedules.",
    },
];

pub const FAQS: [Faq; 3] = [
    Faq {
        question: "Where do you deliver?",
        answer: "We cover residence halls, SoVi, North Lake Village, and most off-campus apartments within 5 miles of campus.",
    },
    Faq {
        question: "How does billing work?",
        answer: "Plans are charged per semester. You will always receive a confirmation before your first drop.",
    },
    Faq {
        question: "Can I share a plan?",
        answer: "Yes. Add roommates when checking out to split water jugs, and manage shared delivery windows together.",
    },
];

/// How it works: (number, title, body)
pub const STEPS: [(&str, &str, &str); 3] = [
    ("1", "Pick a plan", "Pick a subscription length, the amount of jugs, and a delivery window."),
    ("2", "We coordinate", "Inventory, routing, and reminders handled."),
    ("3", "You stay hydrated", "Confirmed drop-off, no hauling required."),
];

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "Aqua Ease was founded in 2025 by students who noticed a common problem, staying hydrated on campus was often inconvenient, expensive, and wasteful. With so many students relying on single-use plastic bottles, it was clear there needed to be a smarter, more sustainable way to access clean drinking water.",
    "Aqua Ease makes hydration effortless by delivering purified 5-gallon water jugs and dispensers straight to dorms and apartments through flexible semester or yearly subscriptions. No more carrying cases of bottles or creating plastic waste, just fresh, reliable water on demand.",
    "As a student-run company, we embody the values of sustainability, convenience, and innovation. Every jug we deliver replaces dozens of disposable bottles, helping our campus stay hydrated while protecting the environment. Aqua Ease is proud to serve fellow Eagles, making clean water easy, affordable, and eco-friendly.",
];

pub const SUBSCRIBE_HIGHLIGHTS: [Card; 3] = [
    Card {
        title: "Semester or year",
        description: "Pick a term that matches your schedule.",
    },
    Card {
        title: "Roommate ready",
        description: "Split costs across your apartment.",
    },
    Card {
        title: "Support built-in",
        description: "Text our team any time on delivery day.",
    },
];
