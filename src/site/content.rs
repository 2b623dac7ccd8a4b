//! Copy and links shown across the site.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SiteInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub repo_url: &'static str,
    pub license: &'static str,
    pub support_email: &'static str,
}

#[derive(Debug, Serialize)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub external: bool,
}

#[derive(Debug, Serialize)]
pub struct Feature {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Testimonial {
    pub id: &'static str,
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub achievement: Option<&'static str>,
    pub rating: u8,
    pub avatar: &'static str,
}

pub const SITE: SiteInfo = SiteInfo {
    name: "Nutree AI",
    tagline: "Your AI Nutritionist in Your Pocket",
    description: "AI-powered nutrition tracking with instant meal scanning, personalized meal planning, and real-time macro tracking.",
    url: "https://nutreeai.com",
    repo_url: "https://github.com/trandactri/nutree-web",
    license: "BSD-3-Clause",
    support_email: "support@nutreeai.com",
};

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        href: "/#features",
        label: "Features",
        external: false,
    },
    NavLink {
        href: "/#how-it-works",
        label: "How it works",
        external: false,
    },
    NavLink {
        href: "/changelog",
        label: "Changelog",
        external: false,
    },
    NavLink {
        href: "https://github.com/trandactri/nutree-web",
        label: "GitHub",
        external: true,
    },
];

pub const HERO_HEADLINES: &[&str] = &["SNAP.", "TRACK.", "THRIVE."];

pub const FEATURES: &[Feature] = &[
    Feature {
        id: "ai-scanning",
        title: "AI Meal Scanning",
        description: "Point your camera at any meal for instant nutritional analysis powered by Google Gemini AI.",
        icon: "📷",
    },
    Feature {
        id: "meal-planning",
        title: "AI Meal Planning",
        description: "Conversational AI suggests personalized meals based on your goals and preferences.",
        icon: "✨",
    },
    Feature {
        id: "dashboard",
        title: "Real-Time Dashboard",
        description: "Visual macro tracking with progress accountability. See your nutrition at a glance.",
        icon: "📊",
    },
    Feature {
        id: "edit",
        title: "Edit with Confidence",
        description: "Adjust portions and items post-scan. Fine-tune your meal data anytime.",
        icon: "✏️",
    },
    Feature {
        id: "personalize",
        title: "Personalize Everything",
        description: "Goals, 7 languages, light/dark theme, metric/imperial. Your app, your way.",
        icon: "⚙️",
    },
];

pub const STEPS: &[Step] = &[
    Step {
        number: "01",
        title: "Snap",
        description: "Point camera at any meal",
    },
    Step {
        number: "02",
        title: "Analyze",
        description: "AI breaks down nutrition instantly",
    },
    Step {
        number: "03",
        title: "Achieve",
        description: "Track progress & hit your goals",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "1",
        quote: "Nutree AI completely changed how I track my food. The AI is incredibly accurate and saves me so much time every day. I finally hit my protein goals consistently!",
        author: "Sarah M.",
        role: "Fitness Enthusiast",
        achievement: Some("Lost 15 lbs in 3 months"),
        rating: 5,
        avatar: "SM",
    },
    Testimonial {
        id: "2",
        quote: "As a busy professional, I never had time to manually log meals. Now I just snap a photo and I am done. The meal planning feature is a game changer for my weekly prep.",
        author: "David K.",
        role: "Software Engineer",
        achievement: Some("Gained 10 lbs muscle"),
        rating: 5,
        avatar: "DK",
    },
    Testimonial {
        id: "3",
        quote: "I have tried every nutrition app out there. Nutree AI is by far the most accurate and easiest to use. The Vietnamese language support is perfect for my family.",
        author: "Linh T.",
        role: "Working Mom",
        achievement: Some("Whole family tracking"),
        rating: 5,
        avatar: "LT",
    },
    Testimonial {
        id: "4",
        quote: "The AI meal suggestions are spot on. It learned my preferences quickly and now suggests meals I actually want to eat. Down 20 lbs and counting!",
        author: "Marcus J.",
        role: "Personal Trainer",
        achievement: Some("Recommends to clients"),
        rating: 5,
        avatar: "MJ",
    },
];
