//! Static classification tables.
//!
//! Everything here is compile-time data: target entities, the fourteen
//! weighted criteria categories, and the literal disaster-impact phrases.
//! Regular-expression families live in [`super::filters`] because they need
//! one-time compilation.

/// Minimum cumulative category weight for a `"yes"` verdict.
pub const QUALIFICATION_THRESHOLD: f64 = 2.0;

/// Number of exclusion-pattern hits at which an event is treated as speculative.
pub const EXCLUSION_LIMIT: usize = 3;

/// Maximum number of example keywords reported per matched category.
pub const MAX_REPORTED_KEYWORDS: usize = 3;

/// Lowercase country, demonym and capital tokens for the geographic gate.
pub const TARGET_ENTITIES: &[&str] = &[
    "indonesia",
    "china",
    "vietnam",
    "cambodia",
    "laos",
    "indonesian",
    "chinese",
    "vietnamese",
    "cambodian",
    "laotian",
    "jakarta",
    "beijing",
    "hanoi",
    "phnom penh",
    "vientiane",
];

/// A named negative-impact theme with its keyword phrases and fixed weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriteriaCategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub weight: f64,
}

/// The fourteen criteria categories, in evaluation order.
pub const CRITERIA: &[CriteriaCategory] = &[
    CriteriaCategory {
        name: "production_disruption",
        keywords: &[
            "factory shutdown",
            "factory shutdowns",
            "plant closure",
            "production halt",
            "manufacturing disruption",
            "supply chain disruption",
            "port closure",
            "port shutdown",
            "port closed",
            "shipping disruption",
            "shipping halted",
            "logistics disruption",
            "airport closure",
            "energy crisis",
            "power outage",
            "blackout",
            "labor strike",
            "worker strike",
            "mass strike",
            "industrial action",
            "work stoppage",
            "factory fire",
            "explosion at",
            "production suspended",
            "operations halted",
            "supply shortage",
            "supply cut",
            "disruption confirmed",
            "shutdown confirmed",
            "strike began",
            "workers' strike",
            "announced shutdowns",
        ],
        weight: 3.0,
    },
    CriteriaCategory {
        name: "corporate_distress",
        keywords: &[
            "bankruptcy",
            "bankrupt",
            "default",
            "defaults on",
            "insolvency",
            "insolvent",
            "debt restructuring",
            "credit downgrade",
            "rating downgrade",
            "downgraded to",
            "liquidity crisis",
            "cash crisis",
            "unable to pay",
            "filed for bankruptcy",
            "chapter 11",
            "creditors meeting",
            "debt default confirmed",
            "restructuring confirmed",
        ],
        weight: 3.0,
    },
    CriteriaCategory {
        name: "sovereign_stress",
        keywords: &[
            "sovereign default",
            "sovereign downgrade",
            "country downgrade",
            "national default",
            "imf bailout",
            "imf program",
            "imf loan",
            "emergency bailout",
            "capital controls",
            "capital flight",
            "bank run",
            "banking crisis",
            "bank collapse",
            "interbank freeze",
            "financial system collapse",
            "currency crisis",
            "currency devaluation",
            "foreign reserves depleted",
            "sovereign debt crisis",
        ],
        weight: 3.5,
    },
    CriteriaCategory {
        name: "trade_restrictions",
        keywords: &[
            "tariff imposed",
            "tariff increase",
            "new tariffs",
            "export ban",
            "import ban",
            "trade ban",
            "sanctions imposed",
            "sanctions announced",
            "trade barriers",
            "market access denied",
            "trade restrictions",
            "embargo",
            "export restrictions",
            "import restrictions",
            "trade war",
            "retaliatory tariffs",
        ],
        weight: 3.0,
    },
    CriteriaCategory {
        name: "regulatory_political_shock",
        keywords: &[
            "nationalization",
            "nationalised",
            "nationalized",
            "asset seizure",
            "assets seized",
            "expropriation",
            "industry ban",
            "sector ban",
            "regulatory crackdown",
            "government crackdown",
            "forced shutdown",
            "political crisis",
            "government collapse",
            "leadership removed",
            "president removed",
            "prime minister removed",
            "coup",
            "military takeover",
            "state of emergency declared",
            "institution dissolved",
            "parliament dissolved",
        ],
        weight: 3.5,
    },
    CriteriaCategory {
        name: "capital_withdrawal",
        keywords: &[
            "business closure",
            "company exit",
            "market exit",
            "withdrawal from market",
            "pulling out",
            "exiting country",
            "capital flight",
            "foreign investment withdrawn",
            "operations relocated",
            "factory relocated",
            "mass layoffs",
            "workforce reduction",
            "hiring freeze",
            "investment cancelled",
            "project cancelled",
            "expansion cancelled",
            "shutdown announced",
            "closure confirmed",
        ],
        weight: 2.5,
    },
    CriteriaCategory {
        name: "demand_contraction",
        keywords: &[
            "demand collapse",
            "demand fell",
            "demand dropped",
            "consumer spending fell",
            "consumer spending declined",
            "exports declined",
            "exports fell",
            "exports dropped",
            "industrial demand fell",
            "b2b transactions declined",
            "sales plummeted",
            "orders cancelled",
            "order backlog",
            "sustained decline",
            "continued contraction",
            "recession",
            "economic contraction",
            "quarter of contraction",
        ],
        weight: 2.5,
    },
    CriteriaCategory {
        name: "natural_disaster",
        keywords: &[
            "earthquake",
            "typhoon",
            "hurricane",
            "cyclone",
            "flood",
            "flooding",
            "major fire",
            "wildfire",
            "epidemic",
            "pandemic",
            "disease outbreak",
            "drought",
            "landslide",
            "tsunami",
            "volcanic eruption",
            "death toll",
            "casualties reported",
            "evacuation ordered",
            "disaster zone",
            "state of emergency",
            "emergency declared",
        ],
        weight: 2.5,
    },
    CriteriaCategory {
        name: "infrastructure_failure",
        keywords: &[
            "power grid failure",
            "grid collapse",
            "blackout",
            "port shutdown",
            "port closed",
            "port disruption",
            "telecommunications outage",
            "network failure",
            "payment system down",
            "banking system down",
            "cyberattack",
            "cyber attack",
            "ransomware",
            "transport system failure",
            "rail disruption",
            "air traffic halted",
            "infrastructure failure",
        ],
        weight: 3.0,
    },
    CriteriaCategory {
        name: "corporate_outlook_cuts",
        keywords: &[
            "negative outlook",
            "outlook cut",
            "profit warning",
            "earnings warning",
            "guidance cut",
            "lowered forecast",
            "capex cut",
            "capital expenditure cut",
            "investment cut",
            "project cancelled",
            "expansion cancelled",
            "hiring freeze",
            "job cuts",
            "layoffs announced",
            "restructuring announced",
            "cost cutting",
        ],
        weight: 2.0,
    },
    CriteriaCategory {
        name: "fiscal_tightening",
        keywords: &[
            "stimulus ended",
            "stimulus withdrawn",
            "support ended",
            "subsidy cut",
            "subsidy removed",
            "subsidy expired",
            "new tax",
            "tax increase",
            "tax hike",
            "austerity measures",
            "spending cuts",
            "budget cuts",
            "fiscal tightening",
            "government spending cut",
        ],
        weight: 2.5,
    },
    CriteriaCategory {
        name: "market_instability",
        keywords: &[
            "market crash",
            "stock market plunge",
            "stocks tumble",
            "index fell",
            "market volatility",
            "sharp decline",
            "currency plunge",
            "currency crash",
            "exchange rate fall",
            "commodity crash",
            "oil price crash",
            "price collapse",
            "trading halted",
            "circuit breaker",
            "sell-off",
        ],
        weight: 2.0,
    },
    CriteriaCategory {
        name: "geopolitical_escalation",
        keywords: &[
            "military conflict",
            "armed conflict",
            "border clash",
            "military confrontation",
            "maritime blockade",
            "naval blockade",
            "civil unrest",
            "riots",
            "protests turn violent",
            "state of emergency declared",
            "mobilization",
            "troops deployed",
            "military action",
            "escalation confirmed",
        ],
        weight: 3.5,
    },
    CriteriaCategory {
        name: "structural_escalation",
        keywords: &[
            "first time",
            "unprecedented",
            "never before",
            "record high",
            "record low",
            "worst since",
            "sharpest decline",
            "largest drop",
            "historic",
            "all-time",
            "exceptional",
            "extraordinary measures",
        ],
        weight: 1.5,
    },
];

/// Literal phrases that describe disaster impact as having already happened.
pub const DISASTER_IMPACT_PHRASES: &[&str] = &[
    "earthquake struck",
    "typhoon hit",
    "flood hit",
    "fire destroyed",
    "killed",
    "died",
    "injured",
    "evacuated",
    "destroyed",
];
