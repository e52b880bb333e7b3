//! Static self-care content.
//!
//! Everything here is fixed text chosen by [`RiskCategory`] or by the tool the
//! user asks for. Hotlines are Singapore services.

use serde::Serialize;

use crate::errors::CoreError;
use crate::risk::RiskCategory;

/// Seconds per box-breathing cycle (inhale, hold, exhale, hold at 4s each).
pub const SECONDS_PER_CYCLE: u32 = 16;
pub const MIN_BREATHING_CYCLES: u32 = 2;
pub const MAX_BREATHING_CYCLES: u32 = 8;
pub const DEFAULT_BREATHING_CYCLES: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hotline {
    pub name: &'static str,
    pub number: &'static str,
    pub availability: Option<&'static str>,
}

pub const HOTLINES: &[Hotline] = &[
    Hotline {
        name: "Samaritans of Singapore (SOS)",
        number: "1767",
        availability: Some("24/7"),
    },
    Hotline {
        name: "Institute of Mental Health (IMH) Mental Health Helpline",
        number: "6389 2222",
        availability: Some("24/7"),
    },
    Hotline {
        name: "Singapore Association for Mental Health (SAMH)",
        number: "1800 283 7019",
        availability: None,
    },
    Hotline {
        name: "Singapore Children's Society (SCS) - Tinkle Friend",
        number: "1800 274 4788",
        availability: Some("for children & youth"),
    },
];

pub const SAFETY_NOTE: &str = "If you feel unsafe right now, please call one of the numbers above \
or reach out to a trusted adult immediately.";

pub const EMERGENCY_NOTE: &str =
    "If you are in danger or need urgent help, contact emergency services immediately.";

pub const BOX_BREATHING_STEPS: &[&str] = &[
    "Inhale 4 seconds",
    "Hold 4 seconds",
    "Exhale 4 seconds",
    "Hold 4 seconds",
];

pub const GROUNDING_STEPS: &[&str] = &[
    "5 things you can see",
    "4 things you can feel",
    "3 things you can hear",
    "2 things you can smell",
    "1 thing you can taste",
];

pub const AFFIRMATIONS: &[&str] = &[
    "I can take things one step at a time.",
    "My feelings are valid, and they will pass.",
    "I am allowed to ask for help.",
    "I don't have to be perfect to be worthy.",
    "I can do hard things.",
];

pub const MINI_PROMPTS: &[&str] = &[
    "What's one thing you can control today?",
    "What's one tiny action that would help right now?",
    "If your friend felt this way, what would you tell them?",
    "What's one thing you did well today, even if it's small?",
];

pub const PRIVACY_NOTICE: &[&str] = &[
    "No login required.",
    "Do not enter your full name, NRIC, address, or other personal identifiers.",
    "Entries are stored in a plain local CSV file.",
];

pub const DISCLAIMER: &str = "This tool provides general self-care suggestions and is not a \
substitute for professional medical advice.";

// ---------------------------------------------------------------------------
// Guidance
// ---------------------------------------------------------------------------

/// A named exercise made of ordered steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub title: &'static str,
    pub steps: &'static [&'static str],
    pub note: Option<&'static str>,
}

pub const BOX_BREATHING: Exercise = Exercise {
    title: "Box Breathing (1 minute)",
    steps: BOX_BREATHING_STEPS,
    note: Some("Repeat 3-4 cycles."),
};

pub const GROUNDING: Exercise = Exercise {
    title: "Grounding 5-4-3-2-1",
    steps: GROUNDING_STEPS,
    note: None,
};

/// Content shown after an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guidance {
    pub category: RiskCategory,
    pub headline: &'static str,
    pub detail: Option<&'static str>,
    pub exercises: Vec<Exercise>,
    pub affirmation: Option<&'static str>,
    pub prompt: Option<&'static str>,
    pub hotlines: &'static [Hotline],
}

/// Pick the self-care content for a category.
#[must_use]
pub fn guidance_for(category: RiskCategory) -> Guidance {
    match category {
        RiskCategory::High => Guidance {
            category,
            headline: "It sounds like you may be going through a really hard moment.",
            detail: Some(
                "You don't have to handle this alone. Please consider reaching out for help right now.",
            ),
            exercises: Vec::new(),
            affirmation: None,
            prompt: None,
            hotlines: HOTLINES,
        },
        RiskCategory::Negative => Guidance {
            category,
            headline: "It seems like you're feeling stressed or upset.",
            detail: Some("If you feel unsafe or overwhelmed, run `mindease support`."),
            exercises: vec![BOX_BREATHING, GROUNDING],
            affirmation: Some("You are doing your best, and that is enough."),
            prompt: None,
            hotlines: &[],
        },
        RiskCategory::Positive => Guidance {
            category,
            headline: "You seem to be feeling okay or positive.",
            detail: None,
            exercises: Vec::new(),
            affirmation: Some("Keep going. Small progress is still progress."),
            prompt: Some("What's one thing that went well today?"),
            hotlines: &[],
        },
        RiskCategory::Neutral => Guidance {
            category,
            headline: "Your mood seems neutral or mixed.",
            detail: None,
            exercises: Vec::new(),
            affirmation: None,
            prompt: Some(
                "What is one small thing you can do in the next 10 minutes to help yourself?",
            ),
            hotlines: &[],
        },
    }
}

/// Affirmation for a rotating index (wraps around the list).
#[must_use]
pub fn affirmation(index: usize) -> &'static str {
    AFFIRMATIONS[index % AFFIRMATIONS.len()]
}

// ---------------------------------------------------------------------------
// Breathing timer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreathingPlan {
    pub cycles: u32,
    pub total_seconds: u32,
    pub steps: &'static [&'static str],
}

/// Build a box-breathing plan for `cycles` rounds.
pub fn breathing_plan(cycles: u32) -> Result<BreathingPlan, CoreError> {
    if !(MIN_BREATHING_CYCLES..=MAX_BREATHING_CYCLES).contains(&cycles) {
        return Err(CoreError::Validation(format!(
            "breathing cycles must be between {MIN_BREATHING_CYCLES} and {MAX_BREATHING_CYCLES}, got {cycles}"
        )));
    }

    Ok(BreathingPlan {
        cycles,
        total_seconds: cycles * SECONDS_PER_CYCLE,
        steps: BOX_BREATHING_STEPS,
    })
}
