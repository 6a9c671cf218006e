// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static site content.
//!
//! Pages render these tables as-is; the booking forms derive their option
//! lists from them so a class or program can never be offered on a page but
//! rejected by its form.

use crate::field::ChoiceOption;
use serde::Serialize;

/// A service highlighted on the home page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

/// A reason to choose the studio.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

/// An upcoming public seminar.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FeaturedSeminar {
    pub title: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
}

/// A yoga style taught at the studio.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct YogaStyle {
    pub name: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub intensity: &'static str,
}

/// A recurring class on the weekly schedule.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScheduledClass {
    /// Value submitted by the class booking form.
    pub slug: &'static str,
    pub name: &'static str,
    pub time: &'static str,
    pub instructor: &'static str,
    pub spots: u8,
}

/// A level grouping of scheduled classes.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ClassLevel {
    pub level: &'static str,
    pub description: &'static str,
    pub classes: &'static [ScheduledClass],
}

/// A numbered step of a process (first visit, consultation).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Step {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
    /// How long the step takes; empty when not applicable.
    pub duration: &'static str,
    pub includes: &'static [&'static str],
}

/// A therapeutic treatment program.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Treatment {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
    pub sessions: &'static str,
    pub success_rate: &'static str,
}

/// A corporate seminar program.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeminarOffering {
    /// Value submitted by the seminar inquiry form.
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub participants: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Yoga Classes",
        description: "From gentle beginners to advanced practitioners, find your practice with Hatha, Vinyasa, and Yin yoga.",
        link: "/classes",
    },
    Service {
        title: "Holistic Treatments",
        description: "Therapeutic yoga for chronic pain, stress relief, respiratory health, and hormonal balance.",
        link: "/treatments",
    },
    Service {
        title: "Private Consultations",
        description: "Personal assessment and a wellness plan built around your needs.",
        link: "/consultations",
    },
    Service {
        title: "Seminars & Workshops",
        description: "Corporate wellness programs, yoga festivals, and group experiences.",
        link: "/seminars",
    },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Certified Experts",
        description: "Instructors with internationally recognized certifications and decades of combined experience.",
    },
    Highlight {
        title: "Medical-Grade Approach",
        description: "Evidence-based practices validated by healthcare professionals.",
    },
    Highlight {
        title: "Personalized Care",
        description: "Every program is tailored to your body, goals, and pace.",
    },
    Highlight {
        title: "Flexible Scheduling",
        description: "Morning, evening, and weekend sessions.",
    },
];

pub const FEATURED_SEMINARS: &[FeaturedSeminar] = &[
    FeaturedSeminar {
        title: "Corporate Wellness Masterclass",
        date: "March 15, 2026",
        location: "San Francisco, CA",
        kind: "Corporate",
    },
    FeaturedSeminar {
        title: "Yoga Festival Workshop",
        date: "April 8-10, 2026",
        location: "Los Angeles, CA",
        kind: "Festival",
    },
    FeaturedSeminar {
        title: "Stress Management Retreat",
        date: "May 20, 2026",
        location: "Sedona, AZ",
        kind: "Retreat",
    },
];

pub const YOGA_STYLES: &[YogaStyle] = &[
    YogaStyle {
        name: "Hatha Yoga",
        description: "Traditional practice of physical postures and breath control. A strong foundation.",
        duration: "60-75 min",
        intensity: "Gentle to Moderate",
    },
    YogaStyle {
        name: "Vinyasa Flow",
        description: "Flowing sequences synchronized with breath for strength, flexibility, and endurance.",
        duration: "60-90 min",
        intensity: "Moderate to High",
    },
    YogaStyle {
        name: "Yin Yoga",
        description: "Long-held postures that target deep connective tissue and promote relaxation.",
        duration: "75-90 min",
        intensity: "Gentle",
    },
];

pub const CLASS_LEVELS: &[ClassLevel] = &[
    ClassLevel {
        level: "Beginner",
        description: "New to yoga or returning after a break? Start with foundational poses and breathing.",
        classes: &[
            ScheduledClass {
                slug: "foundations-of-yoga",
                name: "Foundations of Yoga",
                time: "Mon, Wed 9:00 AM",
                instructor: "Sarah Chen",
                spots: 12,
            },
            ScheduledClass {
                slug: "gentle-morning-flow",
                name: "Gentle Morning Flow",
                time: "Tue, Thu 7:00 AM",
                instructor: "Michael Torres",
                spots: 8,
            },
            ScheduledClass {
                slug: "restorative-basics",
                name: "Restorative Basics",
                time: "Sat 10:00 AM",
                instructor: "Emma Wilson",
                spots: 15,
            },
        ],
    },
    ClassLevel {
        level: "Intermediate",
        description: "Deepen your practice with more challenging postures and sequences.",
        classes: &[
            ScheduledClass {
                slug: "power-vinyasa",
                name: "Power Vinyasa",
                time: "Mon, Wed 6:00 PM",
                instructor: "David Park",
                spots: 6,
            },
            ScheduledClass {
                slug: "alignment-workshop",
                name: "Alignment Workshop",
                time: "Tue 12:00 PM",
                instructor: "Sarah Chen",
                spots: 10,
            },
            ScheduledClass {
                slug: "core-strengthening",
                name: "Core Strengthening",
                time: "Thu 5:30 PM",
                instructor: "Lisa Johnson",
                spots: 4,
            },
        ],
    },
    ClassLevel {
        level: "Advanced",
        description: "For experienced practitioners working on advanced techniques and inversions.",
        classes: &[
            ScheduledClass {
                slug: "advanced-asana",
                name: "Advanced Asana",
                time: "Wed, Fri 7:00 AM",
                instructor: "Raj Patel",
                spots: 5,
            },
            ScheduledClass {
                slug: "arm-balance-mastery",
                name: "Arm Balance Mastery",
                time: "Sat 8:00 AM",
                instructor: "David Park",
                spots: 8,
            },
            ScheduledClass {
                slug: "pranayama-deep-dive",
                name: "Pranayama Deep Dive",
                time: "Sun 9:00 AM",
                instructor: "Raj Patel",
                spots: 12,
            },
        ],
    },
];

/// Options of the class booking form, one per scheduled class.
pub const CLASS_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::new("foundations-of-yoga", "Foundations of Yoga (Beginner)"),
    ChoiceOption::new("gentle-morning-flow", "Gentle Morning Flow (Beginner)"),
    ChoiceOption::new("restorative-basics", "Restorative Basics (Beginner)"),
    ChoiceOption::new("power-vinyasa", "Power Vinyasa (Intermediate)"),
    ChoiceOption::new("alignment-workshop", "Alignment Workshop (Intermediate)"),
    ChoiceOption::new("core-strengthening", "Core Strengthening (Intermediate)"),
    ChoiceOption::new("advanced-asana", "Advanced Asana (Advanced)"),
    ChoiceOption::new("arm-balance-mastery", "Arm Balance Mastery (Advanced)"),
    ChoiceOption::new("pranayama-deep-dive", "Pranayama Deep Dive (Advanced)"),
];

pub const FIRST_TIMER_STEPS: &[Step] = &[
    Step {
        step: 1,
        title: "Choose Your Class",
        description: "Start with a Beginner class or a private session.",
        duration: "",
        includes: &[],
    },
    Step {
        step: 2,
        title: "Arrive Early",
        description: "Come 15 minutes before class to settle in.",
        duration: "",
        includes: &[],
    },
    Step {
        step: 3,
        title: "What to Bring",
        description: "Comfortable clothing and water. Mats and props are provided.",
        duration: "",
        includes: &[],
    },
    Step {
        step: 4,
        title: "Listen to Your Body",
        description: "Rest when needed. Modifications are always available.",
        duration: "",
        includes: &[],
    },
];

pub const TREATMENTS: &[Treatment] = &[
    Treatment {
        id: "chronic-pain",
        title: "Chronic Pain Management",
        subtitle: "Back & Neck Relief",
        description: "Yoga therapy protocols for chronic back and neck pain through targeted postures, breathwork, and progressive relaxation.",
        benefits: &[
            "Reduces inflammation and muscle tension",
            "Improves spinal mobility and alignment",
            "Strengthens core stabilizing muscles",
            "Decreases reliance on pain medication",
        ],
        sessions: "8-12",
        success_rate: "87%",
    },
    Treatment {
        id: "stress-anxiety",
        title: "Stress & Anxiety Reduction",
        subtitle: "Mental Wellness Protocol",
        description: "Pranayama, meditation, and restorative yoga to regulate the nervous system and restore emotional balance.",
        benefits: &[
            "Activates the parasympathetic nervous system",
            "Lowers stress hormones",
            "Improves sleep quality",
            "Builds emotional resilience",
        ],
        sessions: "6-10",
        success_rate: "92%",
    },
    Treatment {
        id: "respiratory",
        title: "Respiratory Health",
        subtitle: "Breathing Optimization",
        description: "Breathing practices and chest-opening postures to improve lung capacity and support respiratory recovery.",
        benefits: &[
            "Increases vital lung capacity",
            "Strengthens respiratory muscles",
            "Improves airflow",
            "Supports post-illness recovery",
        ],
        sessions: "10-14",
        success_rate: "85%",
    },
    Treatment {
        id: "hormonal",
        title: "Hormonal Balance",
        subtitle: "Endocrine System Support",
        description: "Yoga sequences and lifestyle changes supporting thyroid function, menstrual health, and menopause.",
        benefits: &[
            "Supports thyroid function",
            "Eases menstrual discomfort",
            "Supports the menopause transition",
            "Steadies energy through the day",
        ],
        sessions: "12-16",
        success_rate: "79%",
    },
];

pub const CONSULTATION_STEPS: &[Step] = &[
    Step {
        step: 1,
        title: "Comprehensive Assessment",
        description: "An in-depth review of your health history, current conditions, lifestyle, and goals.",
        duration: "60-90 minutes",
        includes: &[
            "Health history review",
            "Physical assessment",
            "Lifestyle analysis",
            "Goal setting session",
        ],
    },
    Step {
        step: 2,
        title: "Personalized Plan",
        description: "A wellness plan built from your assessment: yoga sequences, breathing practices, and lifestyle changes.",
        duration: "1-2 weeks development",
        includes: &[
            "Custom yoga sequence",
            "Breathing protocols",
            "Dietary guidelines",
            "Progress milestones",
        ],
    },
    Step {
        step: 3,
        title: "Guided Execution",
        description: "Regular one-on-one sessions with hands-on adjustments and ongoing support.",
        duration: "4-12 weeks program",
        includes: &[
            "Weekly private sessions",
            "Video resources",
            "Email support",
            "Progress tracking",
        ],
    },
    Step {
        step: 4,
        title: "Recovery & Maintenance",
        description: "A sustainable maintenance plan with regular check-ins as your needs evolve.",
        duration: "Ongoing support",
        includes: &[
            "Monthly check-ins",
            "Plan adjustments",
            "Group class access",
            "Lifetime resources",
        ],
    },
];

pub const SEMINAR_OFFERINGS: &[SeminarOffering] = &[
    SeminarOffering {
        slug: "stress-management",
        title: "Stress Management Programs",
        description: "Guided breathing, meditation, and movement sessions for workplace stress.",
        duration: "4-8 weeks",
        participants: "20-200",
    },
    SeminarOffering {
        slug: "desk-yoga",
        title: "Desk Yoga Workshops",
        description: "Short sequences designed for office environments.",
        duration: "1-2 hours",
        participants: "10-50",
    },
    SeminarOffering {
        slug: "leadership-mindfulness",
        title: "Leadership Mindfulness",
        description: "Mindfulness practice combined with leadership development for executives.",
        duration: "2-day retreat",
        participants: "10-30",
    },
    SeminarOffering {
        slug: "team-building-retreat",
        title: "Team Building Retreats",
        description: "Full-day or weekend retreats of yoga, meditation, and team activities.",
        duration: "1-3 days",
        participants: "15-100",
    },
];

/// Options of the seminar inquiry form: every offering plus festival events.
pub const SEMINAR_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::new("stress-management", "Stress Management Programs"),
    ChoiceOption::new("desk-yoga", "Desk Yoga Workshops"),
    ChoiceOption::new("leadership-mindfulness", "Leadership Mindfulness"),
    ChoiceOption::new("team-building-retreat", "Team Building Retreats"),
    ChoiceOption::new("festival-event", "Festival or Conference"),
];

pub const FESTIVAL_TOPICS: &[&str] = &[
    "Keynote: The Science of Yoga & Wellness",
    "Vinyasa Flow Masterclass (500+ participants)",
    "Pranayama & Meditation Workshop",
    "Yoga for Chronic Pain Management",
    "Building a Sustainable Yoga Practice",
    "The Business of Wellness",
];

/// Session types offered by the session booking form.
pub const SESSION_TYPES: &[ChoiceOption] = &[
    ChoiceOption::new("consultation", "Initial Consultation"),
    ChoiceOption::new("yoga-private", "Private Yoga Session"),
    ChoiceOption::new("therapy", "Yoga Therapy"),
    ChoiceOption::new("meditation", "Meditation Session"),
];
