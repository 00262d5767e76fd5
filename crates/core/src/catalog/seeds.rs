//! Seed tables for the shipped catalog.

use rust_decimal::Decimal;

use crate::domain::combo::{
    BudgetTier, Combo, ComboId, ComboMetrics, Review, RubberFitting, Side, SkillLevel,
};
use crate::domain::equipment::{Equipment, EquipmentId, EquipmentKind, PlayStyle};
use crate::domain::insight::{InsightEntry, ProVideo};
use crate::domain::training::{
    Exercise, ExerciseId, ExerciseLevel, Intensity, MediaKind, MediaRef,
};

use super::Catalog;

#[derive(Clone, Copy, Debug)]
struct EquipmentSeed {
    id: &'static str,
    kind: EquipmentKind,
    name: &'static str,
    brand: &'static str,
    style: PlayStyle,
    price_cents: i64,
    tempo: Option<u8>,
    spin: Option<u8>,
    control: Option<u8>,
    weight_grams: Option<u16>,
    carbon: bool,
    composition: Option<&'static str>,
    hardness: Option<&'static str>,
}

const ALLROUND_CLASSIC: EquipmentSeed = EquipmentSeed {
    id: "bl-allround-classic",
    kind: EquipmentKind::Blade,
    name: "Allround Classic",
    brand: "Stiga",
    style: PlayStyle::Allround,
    price_cents: 44_95,
    tempo: Some(62),
    spin: None,
    control: Some(92),
    weight_grams: Some(78),
    carbon: false,
    composition: Some("5-ply limba/ayous"),
    hardness: None,
};

const VISCARIA: EquipmentSeed = EquipmentSeed {
    id: "bl-viscaria",
    kind: EquipmentKind::Blade,
    name: "Viscaria",
    brand: "Butterfly",
    style: PlayStyle::Offensive,
    price_cents: 189_90,
    tempo: Some(90),
    spin: None,
    control: Some(72),
    weight_grams: Some(85),
    carbon: true,
    composition: Some("5-ply wood + 2 arylate-carbon"),
    hardness: None,
};

const DEFPLAY_SENSO: EquipmentSeed = EquipmentSeed {
    id: "bl-defplay-senso",
    kind: EquipmentKind::Blade,
    name: "Defplay Senso",
    brand: "Donic",
    style: PlayStyle::Defensive,
    price_cents: 49_90,
    tempo: Some(48),
    spin: None,
    control: Some(95),
    weight_grams: Some(88),
    carbon: false,
    composition: Some("5-ply wood, oversized head"),
    hardness: None,
};

const TRUE_CARBON: EquipmentSeed = EquipmentSeed {
    id: "bl-true-carbon",
    kind: EquipmentKind::Blade,
    name: "Ovtcharov True Carbon",
    brand: "Donic",
    style: PlayStyle::Offensive,
    price_cents: 99_90,
    tempo: Some(86),
    spin: None,
    control: Some(74),
    weight_grams: Some(89),
    carbon: true,
    composition: Some("7-ply wood + 2 carbon"),
    hardness: None,
};

const SWEDEN_EXTRA: EquipmentSeed = EquipmentSeed {
    id: "bl-sweden-extra",
    kind: EquipmentKind::Blade,
    name: "Sweden Extra",
    brand: "Yasaka",
    style: PlayStyle::Allround,
    price_cents: 54_90,
    tempo: Some(70),
    spin: None,
    control: Some(86),
    weight_grams: Some(85),
    carbon: false,
    composition: Some("5-ply wood"),
    hardness: None,
};

const MARK_V: EquipmentSeed = EquipmentSeed {
    id: "ru-mark-v",
    kind: EquipmentKind::Rubber,
    name: "Mark V",
    brand: "Yasaka",
    style: PlayStyle::Allround,
    price_cents: 39_90,
    tempo: Some(75),
    spin: Some(82),
    control: Some(85),
    weight_grams: None,
    carbon: false,
    composition: None,
    hardness: Some("medium"),
};

const TENERGY_05: EquipmentSeed = EquipmentSeed {
    id: "ru-tenergy-05",
    kind: EquipmentKind::Rubber,
    name: "Tenergy 05",
    brand: "Butterfly",
    style: PlayStyle::Offensive,
    price_cents: 54_90,
    tempo: Some(92),
    spin: Some(95),
    control: Some(68),
    weight_grams: None,
    carbon: false,
    composition: None,
    hardness: Some("medium-hard"),
};

const RAKZA_7: EquipmentSeed = EquipmentSeed {
    id: "ru-rakza-7",
    kind: EquipmentKind::Rubber,
    name: "Rakza 7",
    brand: "Yasaka",
    style: PlayStyle::Offensive,
    price_cents: 36_90,
    tempo: Some(85),
    spin: Some(88),
    control: Some(76),
    weight_grams: None,
    carbon: false,
    composition: None,
    hardness: Some("medium-hard"),
};

const VEGA_EUROPE: EquipmentSeed = EquipmentSeed {
    id: "ru-vega-europe",
    kind: EquipmentKind::Rubber,
    name: "Vega Europe",
    brand: "Xiom",
    style: PlayStyle::Allround,
    price_cents: 34_95,
    tempo: Some(78),
    spin: Some(84),
    control: Some(82),
    weight_grams: None,
    carbon: false,
    composition: None,
    hardness: Some("soft"),
};

// Long pimples: no meaningful tempo rating, the sheet lives from control.
const CURL_P1V: EquipmentSeed = EquipmentSeed {
    id: "ru-curl-p1v",
    kind: EquipmentKind::Rubber,
    name: "Curl P1V",
    brand: "Victas",
    style: PlayStyle::Defensive,
    price_cents: 32_90,
    tempo: None,
    spin: Some(70),
    control: Some(88),
    weight_grams: None,
    carbon: false,
    composition: None,
    hardness: Some("soft"),
};

const BARACUDA: EquipmentSeed = EquipmentSeed {
    id: "ru-baracuda",
    kind: EquipmentKind::Rubber,
    name: "Baracuda",
    brand: "Donic",
    style: PlayStyle::Offensive,
    price_cents: 38_90,
    tempo: Some(83),
    spin: Some(90),
    control: Some(77),
    weight_grams: None,
    carbon: false,
    composition: None,
    hardness: Some("medium"),
};

const ROZENA: EquipmentSeed = EquipmentSeed {
    id: "ru-rozena",
    kind: EquipmentKind::Rubber,
    name: "Rozena",
    brand: "Butterfly",
    style: PlayStyle::Allround,
    price_cents: 44_90,
    tempo: Some(82),
    spin: Some(86),
    control: Some(80),
    weight_grams: None,
    carbon: false,
    composition: None,
    hardness: Some("medium"),
};

const EQUIPMENT_SEEDS: &[EquipmentSeed] = &[
    ALLROUND_CLASSIC,
    VISCARIA,
    DEFPLAY_SENSO,
    TRUE_CARBON,
    SWEDEN_EXTRA,
    MARK_V,
    TENERGY_05,
    RAKZA_7,
    VEGA_EUROPE,
    CURL_P1V,
    BARACUDA,
    ROZENA,
];

#[derive(Clone, Copy, Debug)]
struct MetricsSeed {
    tempo: u8,
    spin: u8,
    control: u8,
    balance: &'static str,
}

#[derive(Clone, Copy, Debug)]
struct ReviewSeed {
    user: &'static str,
    quote: &'static str,
    rating: f32,
}

#[derive(Clone, Copy, Debug)]
struct ComboSeed {
    id: &'static str,
    name: &'static str,
    style: PlayStyle,
    level: SkillLevel,
    budget: BudgetTier,
    blade: EquipmentSeed,
    forehand: EquipmentSeed,
    backhand: EquipmentSeed,
    metrics: MetricsSeed,
    description: &'static str,
    reviews: &'static [ReviewSeed],
}

const COMBO_SEEDS: &[ComboSeed] = &[
    ComboSeed {
        id: "combo-first-steps",
        name: "First Steps Allround",
        style: PlayStyle::Allround,
        level: SkillLevel::Beginner,
        budget: BudgetTier::Under150,
        blade: ALLROUND_CLASSIC,
        forehand: MARK_V,
        backhand: MARK_V,
        metrics: MetricsSeed { tempo: 64, spin: 78, control: 90, balance: "ALL" },
        description: "A forgiving first racket: slow enough to learn strokes \
                      cleanly, spinny enough to grow into topspin play.",
        reviews: &[
            ReviewSeed {
                user: "Milan",
                quote: "My club recommends this to every newcomer.",
                rating: 4.8,
            },
            ReviewSeed {
                user: "Sara",
                quote: "Control is outstanding, still fast enough for drills.",
                rating: 4.5,
            },
        ],
    },
    ComboSeed {
        id: "combo-control-tour",
        name: "Control Tour",
        style: PlayStyle::Allround,
        level: SkillLevel::Intermediate,
        budget: BudgetTier::Under150,
        blade: SWEDEN_EXTRA,
        forehand: VEGA_EUROPE,
        backhand: MARK_V,
        metrics: MetricsSeed { tempo: 72, spin: 83, control: 86, balance: "ALL+" },
        description: "Balanced all-wood setup for players who build points \
                      patiently and want placement over raw speed.",
        reviews: &[
            ReviewSeed {
                user: "Jonas",
                quote: "Blocks and pushes feel glued to the table.",
                rating: 4.6,
            },
            ReviewSeed {
                user: "Aiko",
                quote: "Great step up from a ready-made bat.",
                rating: 4.4,
            },
        ],
    },
    ComboSeed {
        id: "combo-spin-academy",
        name: "Spin Academy",
        style: PlayStyle::Offensive,
        level: SkillLevel::Intermediate,
        budget: BudgetTier::Mid150To250,
        blade: TRUE_CARBON,
        forehand: RAKZA_7,
        backhand: VEGA_EUROPE,
        metrics: MetricsSeed { tempo: 84, spin: 88, control: 76, balance: "OFF-" },
        description: "Carbon-assisted topspin trainer: the softer backhand \
                      sheet keeps openings safe while the forehand bites.",
        reviews: &[
            ReviewSeed {
                user: "Pavel",
                quote: "Loops kick forward noticeably, still controllable.",
                rating: 4.7,
            },
            ReviewSeed {
                user: "Ines",
                quote: "Perfect for structured loop-to-loop training.",
                rating: 4.3,
            },
        ],
    },
    ComboSeed {
        id: "combo-fortress",
        name: "Fortress Defence",
        style: PlayStyle::Defensive,
        level: SkillLevel::Intermediate,
        budget: BudgetTier::Under150,
        blade: DEFPLAY_SENSO,
        forehand: MARK_V,
        backhand: CURL_P1V,
        metrics: MetricsSeed { tempo: 52, spin: 74, control: 93, balance: "DEF" },
        description: "Classic chop setup: smooth forehand for variation, long \
                      pimples on the backhand to reverse incoming spin.",
        reviews: &[
            ReviewSeed {
                user: "Henrik",
                quote: "Chops stay low and the pimples confuse everyone.",
                rating: 4.6,
            },
            ReviewSeed {
                user: "Lin",
                quote: "Needs patience, rewards it with absurd control.",
                rating: 4.2,
            },
        ],
    },
    ComboSeed {
        id: "combo-modern-defender",
        name: "Modern Defender",
        style: PlayStyle::Defensive,
        level: SkillLevel::Advanced,
        budget: BudgetTier::Mid150To250,
        blade: TRUE_CARBON,
        forehand: BARACUDA,
        backhand: CURL_P1V,
        metrics: MetricsSeed { tempo: 68, spin: 85, control: 84, balance: "DEF+" },
        description: "Chop-and-attack hybrid: carbon speed for counter-loops, \
                      pimples for the classic defensive game.",
        reviews: &[
            ReviewSeed {
                user: "Viktor",
                quote: "Switching from chop to attack has never felt easier.",
                rating: 4.5,
            },
            ReviewSeed {
                user: "Marta",
                quote: "Demanding, but the counter-attack is a weapon.",
                rating: 4.1,
            },
        ],
    },
    ComboSeed {
        id: "combo-pro-arc",
        name: "Pro Arc Carbon",
        style: PlayStyle::Offensive,
        level: SkillLevel::Advanced,
        budget: BudgetTier::Over250,
        blade: VISCARIA,
        forehand: TENERGY_05,
        backhand: TENERGY_05,
        metrics: MetricsSeed { tempo: 93, spin: 94, control: 66, balance: "OFF+" },
        description: "The tournament standard: maximum arc and pace for \
                      players who finish points inside three strokes.",
        reviews: &[
            ReviewSeed {
                user: "Daniel",
                quote: "Identical to what half my league plays. Deadly.",
                rating: 4.9,
            },
            ReviewSeed {
                user: "Yuki",
                quote: "Unforgiving on passive play, brilliant on attack.",
                rating: 4.4,
            },
        ],
    },
    ComboSeed {
        id: "combo-speed-demon",
        name: "Speed Demon",
        style: PlayStyle::Offensive,
        level: SkillLevel::Advanced,
        budget: BudgetTier::Over250,
        blade: VISCARIA,
        forehand: TENERGY_05,
        backhand: RAKZA_7,
        metrics: MetricsSeed { tempo: 91, spin: 92, control: 70, balance: "OFF" },
        description: "Pace-first attacking setup with a slightly tamer \
                      backhand wing for flicks and counters over the table.",
        reviews: &[
            ReviewSeed {
                user: "Oscar",
                quote: "First ball wins. That is the whole game plan.",
                rating: 4.6,
            },
            ReviewSeed {
                user: "Petra",
                quote: "The backhand sheet keeps the banana flick honest.",
                rating: 4.3,
            },
        ],
    },
];

const GOAL_SEEDS: &[&str] = &[
    "Topspin",
    "Backhand",
    "Serve",
    "Return",
    "Footwork",
    "Consistency",
    "Match tactics",
    "Spin variation",
];

#[derive(Clone, Copy, Debug)]
struct ExerciseSeed {
    id: &'static str,
    title: &'static str,
    category: &'static str,
    level: ExerciseLevel,
    goals: &'static [&'static str],
    intensity: Intensity,
    duration_min: u32,
    description: &'static str,
    media_title: &'static str,
    media_kind: MediaKind,
}

const EXERCISE_SEEDS: &[ExerciseSeed] = &[
    ExerciseSeed {
        id: "ex-fh-topspin-basics",
        title: "Forehand topspin against block",
        category: "Technique",
        level: ExerciseLevel::Beginner,
        goals: &["Topspin", "Consistency"],
        intensity: Intensity::Moderate,
        duration_min: 30,
        description: "Diagonal forehand topspin to a steady block, focus on \
                      brushing contact and a relaxed recovery.",
        media_title: "Topspin stroke cycle",
        media_kind: MediaKind::Video,
    },
    ExerciseSeed {
        id: "ex-bh-drive-rally",
        title: "Backhand drive rally",
        category: "Technique",
        level: ExerciseLevel::Beginner,
        goals: &["Backhand", "Consistency"],
        intensity: Intensity::Low,
        duration_min: 25,
        description: "Backhand-to-backhand drives, counting streaks of \
                      twenty before adding placement changes.",
        media_title: "Backhand drive fundamentals",
        media_kind: MediaKind::Video,
    },
    ExerciseSeed {
        id: "ex-serve-spin",
        title: "Short pendulum serve",
        category: "Serve",
        level: ExerciseLevel::All,
        goals: &["Serve", "Spin variation"],
        intensity: Intensity::Low,
        duration_min: 20,
        description: "Bucket of balls, pendulum serves kept half-long, \
                      alternating backspin and sidespin with the same motion.",
        media_title: "Pendulum serve close-up",
        media_kind: MediaKind::Animation,
    },
    ExerciseSeed {
        id: "ex-serve-return",
        title: "Return against backspin serve",
        category: "Serve",
        level: ExerciseLevel::Intermediate,
        goals: &["Return", "Consistency"],
        intensity: Intensity::Moderate,
        duration_min: 25,
        description: "Partner serves heavy backspin, returner alternates \
                      push-long and flick depending on the bounce.",
        media_title: "Reading serve spin",
        media_kind: MediaKind::Video,
    },
    ExerciseSeed {
        id: "ex-footwork-ladder",
        title: "Side-to-side footwork",
        category: "Athletics",
        level: ExerciseLevel::All,
        goals: &["Footwork"],
        intensity: Intensity::High,
        duration_min: 20,
        description: "One-point forehand from two corners, shadow ladder \
                      between rallies to keep the feet honest.",
        media_title: "Footwork patterns",
        media_kind: MediaKind::Animation,
    },
    ExerciseSeed {
        id: "ex-third-ball",
        title: "Third-ball attack pattern",
        category: "Tactics",
        level: ExerciseLevel::Intermediate,
        goals: &["Topspin", "Match tactics", "Serve"],
        intensity: Intensity::High,
        duration_min: 35,
        description: "Serve short, partner pushes long, open hard to a \
                      pre-announced corner; rotate corners every ten serves.",
        media_title: "Third-ball decision tree",
        media_kind: MediaKind::Video,
    },
    ExerciseSeed {
        id: "ex-bh-topspin-open",
        title: "Backhand topspin opening",
        category: "Technique",
        level: ExerciseLevel::Advanced,
        goals: &["Backhand", "Topspin"],
        intensity: Intensity::High,
        duration_min: 30,
        description: "Open against backspin with the backhand only, then \
                      free play from the third ball on.",
        media_title: "Backhand opening mechanics",
        media_kind: MediaKind::Video,
    },
    ExerciseSeed {
        id: "ex-random-placement",
        title: "Random placement blocks",
        category: "Tactics",
        level: ExerciseLevel::Advanced,
        goals: &["Consistency", "Match tactics"],
        intensity: Intensity::Moderate,
        duration_min: 40,
        description: "Blocker distributes freely, attacker must keep the \
                      loop going while reading placement late.",
        media_title: "Irregular drills explained",
        media_kind: MediaKind::Video,
    },
    ExerciseSeed {
        id: "ex-multiball-spin",
        title: "Multi-ball spin variation",
        category: "Technique",
        level: ExerciseLevel::Intermediate,
        goals: &["Spin variation", "Topspin"],
        intensity: Intensity::High,
        duration_min: 30,
        description: "Feeder mixes backspin and no-spin balls, player must \
                      adjust racket angle and announce the spin read aloud.",
        media_title: "Multi-ball feeding guide",
        media_kind: MediaKind::Video,
    },
    ExerciseSeed {
        id: "ex-match-sets",
        title: "Practice sets with tactics review",
        category: "Tactics",
        level: ExerciseLevel::All,
        goals: &["Match tactics"],
        intensity: Intensity::Moderate,
        duration_min: 45,
        description: "Best-of-three sets, thirty seconds of tactic notes \
                      between games, loser names the adjustment to try next.",
        media_title: "Between-game routines",
        media_kind: MediaKind::Animation,
    },
];

#[derive(Clone, Copy, Debug)]
struct InsightSeed {
    focus_area: &'static str,
    strengths: &'static [&'static str],
    improvements: &'static [&'static str],
    drills: &'static [&'static str],
}

const INSIGHT_SEEDS: &[InsightSeed] = &[
    InsightSeed {
        focus_area: "topspin",
        strengths: &[
            "Stable upper-body rotation through the stroke",
            "Contact point consistently in front of the body",
            "Good recovery position after the follow-through",
        ],
        improvements: &[
            "More leg drive: the arm still does most of the acceleration",
            "Brush thinner on slow openings instead of hitting through",
            "Keep the free arm up for balance on wide forehands",
        ],
        drills: &["ex-fh-topspin-basics", "ex-multiball-spin", "ex-bh-topspin-open"],
    },
    InsightSeed {
        focus_area: "serve",
        strengths: &[
            "Low toss with a clean, legal release",
            "Same motion hides backspin and no-spin well",
        ],
        improvements: &[
            "Second bounce often drifts long: shorten the contact",
            "Add a fast long serve to keep receivers honest",
            "Vary placement to the elbow, not only wide",
        ],
        drills: &["ex-serve-spin", "ex-serve-return", "ex-third-ball"],
    },
    InsightSeed {
        focus_area: "footwork",
        strengths: &[
            "Quick first step towards the wide forehand",
            "Stays low between strokes",
        ],
        improvements: &[
            "Crossover step to the backhand corner arrives late",
            "Weight settles on the heels during long rallies",
            "Recover to a neutral base instead of leaning forehand",
        ],
        drills: &["ex-footwork-ladder", "ex-random-placement"],
    },
    InsightSeed {
        focus_area: "backhand",
        strengths: &[
            "Compact swing that holds up under pressure",
            "Wrist relaxed at contact for easy spin",
        ],
        improvements: &[
            "Opening against heavy backspin needs more lift",
            "Elbow drifts into the body on fast exchanges",
            "Commit to the down-the-line change earlier",
        ],
        drills: &["ex-bh-drive-rally", "ex-bh-topspin-open"],
    },
];

#[derive(Clone, Copy, Debug)]
struct ProVideoSeed {
    focus_area: &'static str,
    title: &'static str,
    url: &'static str,
    focus: &'static str,
}

const PRO_VIDEO_SEEDS: &[ProVideoSeed] = &[
    ProVideoSeed {
        focus_area: "topspin",
        title: "Ma Long forehand loop, super slow motion",
        url: "https://videos.racketlab.example/ma-long-forehand-loop",
        focus: "Hip rotation and thin contact",
    },
    ProVideoSeed {
        focus_area: "topspin",
        title: "Timo Boll: spin first, speed second",
        url: "https://videos.racketlab.example/boll-spin-first",
        focus: "Opening slow balls with pure brush",
    },
    ProVideoSeed {
        focus_area: "serve",
        title: "Dima Ovtcharov backhand serve breakdown",
        url: "https://videos.racketlab.example/ovtcharov-serve",
        focus: "Disguising length with one motion",
    },
    ProVideoSeed {
        focus_area: "serve",
        title: "Short serve masterclass",
        url: "https://videos.racketlab.example/short-serve-masterclass",
        focus: "Keeping the second bounce on the table",
    },
    ProVideoSeed {
        focus_area: "footwork",
        title: "Zhang Jike in-and-out footwork",
        url: "https://videos.racketlab.example/zhang-jike-footwork",
        focus: "Short-ball step-in and recovery",
    },
    ProVideoSeed {
        focus_area: "footwork",
        title: "Falkenberg drill, pro tempo",
        url: "https://videos.racketlab.example/falkenberg-drill",
        focus: "Classic three-point movement pattern",
    },
    ProVideoSeed {
        focus_area: "backhand",
        title: "Fan Zhendong backhand counter",
        url: "https://videos.racketlab.example/fzd-backhand-counter",
        focus: "Compact swing under pressure",
    },
    ProVideoSeed {
        focus_area: "backhand",
        title: "Banana flick, frame by frame",
        url: "https://videos.racketlab.example/banana-flick-frames",
        focus: "Wrist preload over the table",
    },
];

fn build_equipment(seed: &EquipmentSeed) -> Equipment {
    Equipment {
        id: EquipmentId(seed.id.to_owned()),
        kind: seed.kind,
        name: seed.name.to_owned(),
        brand: seed.brand.to_owned(),
        style: seed.style,
        price: Decimal::new(seed.price_cents, 2),
        tempo: seed.tempo,
        spin: seed.spin,
        control: seed.control,
        weight_grams: seed.weight_grams,
        carbon: seed.carbon,
        composition: seed.composition.map(str::to_owned),
        hardness: seed.hardness.map(str::to_owned),
    }
}

fn build_combo(seed: &ComboSeed) -> Combo {
    let blade = build_equipment(&seed.blade);
    let forehand = build_equipment(&seed.forehand);
    let backhand = build_equipment(&seed.backhand);
    let total_price = blade.price + forehand.price + backhand.price;
    let carbon = blade.carbon;

    Combo {
        id: ComboId(seed.id.to_owned()),
        name: seed.name.to_owned(),
        style: seed.style,
        level: seed.level,
        budget: seed.budget,
        blade,
        rubbers: [
            RubberFitting { side: Side::Forehand, rubber: forehand },
            RubberFitting { side: Side::Backhand, rubber: backhand },
        ],
        total_price,
        metrics: ComboMetrics {
            tempo: seed.metrics.tempo,
            spin: seed.metrics.spin,
            control: seed.metrics.control,
            balance: seed.metrics.balance.to_owned(),
        },
        description: seed.description.to_owned(),
        reviews: seed
            .reviews
            .iter()
            .map(|review| Review {
                user: review.user.to_owned(),
                quote: review.quote.to_owned(),
                rating: review.rating,
            })
            .collect(),
        carbon,
    }
}

fn build_exercise(seed: &ExerciseSeed) -> Exercise {
    Exercise {
        id: ExerciseId(seed.id.to_owned()),
        title: seed.title.to_owned(),
        category: seed.category.to_owned(),
        level: seed.level,
        goals: seed.goals.iter().map(|goal| (*goal).to_owned()).collect(),
        intensity: seed.intensity,
        duration_min: seed.duration_min,
        description: seed.description.to_owned(),
        media: MediaRef { title: seed.media_title.to_owned(), kind: seed.media_kind },
    }
}

fn build_insight(seed: &InsightSeed) -> InsightEntry {
    InsightEntry {
        focus_area: seed.focus_area.to_owned(),
        strengths: seed.strengths.iter().map(|line| (*line).to_owned()).collect(),
        improvements: seed.improvements.iter().map(|line| (*line).to_owned()).collect(),
        drills: seed.drills.iter().map(|id| ExerciseId((*id).to_owned())).collect(),
    }
}

fn build_pro_video(seed: &ProVideoSeed) -> ProVideo {
    ProVideo {
        focus_area: seed.focus_area.to_owned(),
        title: seed.title.to_owned(),
        url: seed.url.to_owned(),
        focus: seed.focus.to_owned(),
    }
}

pub(super) fn builtin() -> Catalog {
    Catalog::new(
        EQUIPMENT_SEEDS.iter().map(build_equipment).collect(),
        COMBO_SEEDS.iter().map(build_combo).collect(),
        GOAL_SEEDS.iter().map(|goal| (*goal).to_owned()).collect(),
        EXERCISE_SEEDS.iter().map(build_exercise).collect(),
        INSIGHT_SEEDS.iter().map(build_insight).collect(),
        PRO_VIDEO_SEEDS.iter().map(build_pro_video).collect(),
    )
}
