//! Static subject knowledge used by the response selector.
//!
//! The table is built once on first use and never mutated. Topic order is
//! significant: when two topics score the same, the earlier one wins.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Subject-matter buckets known to the assistant
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    Display,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TopicId {
    Polity,
    Economy,
    Geography,
    History,
    Environment,
    InternationalRelations,
    ScienceTechnology,
    Ethics,
    Csat,
}

impl TopicId {
    pub fn display_name(&self) -> &'static str {
        match self {
            TopicId::Polity => "Indian Polity",
            TopicId::Economy => "Indian Economy",
            TopicId::Geography => "Geography",
            TopicId::History => "History",
            TopicId::Environment => "Environment & Ecology",
            TopicId::InternationalRelations => "International Relations",
            TopicId::ScienceTechnology => "Science & Technology",
            TopicId::Ethics => "Ethics & Integrity",
            TopicId::Csat => "CSAT",
        }
    }

    /// Key used in config files and on the command line
    pub fn key(&self) -> &'static str {
        self.into()
    }
}

/// A named sub-topic with a dedicated canned explanation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Concept {
    pub phrase: &'static str,
    pub explanation: &'static str,
    pub analysis: Option<&'static str>,
    pub strategy: Option<&'static str>,
}

impl Concept {
    pub const fn new(phrase: &'static str, explanation: &'static str) -> Self {
        Self {
            phrase,
            explanation,
            analysis: None,
            strategy: None,
        }
    }

    pub const fn with_analysis(mut self, analysis: &'static str) -> Self {
        self.analysis = Some(analysis);
        self
    }

    pub const fn with_strategy(mut self, strategy: &'static str) -> Self {
        self.strategy = Some(strategy);
        self
    }
}

/// Everything the assistant knows about one topic
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeEntry {
    pub topic: TopicId,
    pub keywords: &'static [&'static str],
    pub concepts: &'static [Concept],
    pub focus_areas: &'static [&'static str],
    pub sources: &'static [&'static str],
}

impl KnowledgeEntry {
    pub fn concept(&self, phrase: &str) -> Option<&Concept> {
        self.concepts.iter().find(|c| c.phrase == phrase)
    }
}

/// Ordered topic table with lookup by id
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
    index: HashMap<TopicId, usize>,
}

impl KnowledgeBase {
    /// Build a knowledge base; iteration order follows `entries`.
    /// A topic listed twice keeps its first position.
    pub fn new(entries: Vec<KnowledgeEntry>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            index.entry(entry.topic).or_insert(i);
        }
        Self { entries, index }
    }

    /// The built-in UPSC table
    pub fn builtin() -> Self {
        Self::new(vec![
            POLITY, ECONOMY, GEOGRAPHY, HISTORY, ENVIRONMENT, INTERNATIONAL_RELATIONS,
            SCIENCE_TECHNOLOGY, ETHICS, CSAT,
        ])
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn get(&self, topic: TopicId) -> Option<&KnowledgeEntry> {
        self.index.get(&topic).map(|&i| &self.entries[i])
    }
}

/// Process-wide knowledge table
pub static KNOWLEDGE: Lazy<KnowledgeBase> = Lazy::new(KnowledgeBase::builtin);

const POLITY: KnowledgeEntry = KnowledgeEntry {
    topic: TopicId::Polity,
    keywords: &[
        "polity",
        "constitution",
        "parliament",
        "federal",
        "judiciary",
        "supreme court",
        "fundamental rights",
        "governor",
        "president",
        "lok sabha",
        "rajya sabha",
        "amendment",
        "preamble",
        "election",
    ],
    concepts: &[
        Concept::new(
            "federalism",
            "Federalism in India divides power between the Union and the States through the Seventh Schedule (Union, State and Concurrent Lists). The Constitution creates a 'Union of States' with a strong centre: Parliament can alter state boundaries (Article 3), emergency provisions centralise power, and residuary powers rest with the Union. Scholars such as K.C. Wheare call it 'quasi-federal'.",
        )
        .with_analysis(
            "Cooperative federalism is visible in the NITI Aayog and the Inter-State Council, while competitive federalism shows up in state rankings on ease of doing business. Friction points include the role of the Governor, the use of Article 356 and fiscal dependence of states on central transfers.",
        )
        .with_strategy(
            "Read Part XI of the Constitution with the S.R. Bommai judgment. Prepare a one-page table of centralising versus federal features and keep two or three recent Centre-State disputes ready as Mains examples.",
        ),
        Concept::new(
            "fundamental rights",
            "Fundamental Rights (Part III, Articles 12-35) are justiciable guarantees enforceable through writs under Articles 32 and 226. They cover equality, freedom, protection against exploitation, freedom of religion, cultural and educational rights, and constitutional remedies.",
        )
        .with_analysis(
            "The scope of Article 21 has expanded through judicial interpretation to include privacy, a clean environment and the right to livelihood. Reasonable restrictions keep these rights balanced against public order and the integrity of the nation.",
        )
        .with_strategy(
            "Learn each Article with one landmark case (Maneka Gandhi, Puttaswamy, Kesavananda Bharati). Prelims often tests which rights are available only to citizens.",
        ),
        Concept::new(
            "directive principles",
            "Directive Principles of State Policy (Part IV, Articles 36-51) are non-justiciable guidelines for governance drawn from the Irish Constitution. They aim at a welfare state: equal pay for equal work, a uniform civil code, village panchayats and protection of the environment.",
        )
        .with_analysis(
            "The Minerva Mills case held that harmony between Fundamental Rights and Directive Principles is part of the basic structure.",
        ),
        Concept::new(
            "separation of powers",
            "Separation of powers distributes functions among the legislature, executive and judiciary. India follows a functional separation with checks and balances rather than the rigid American model.",
        ),
        Concept::new(
            "judicial review",
            "Judicial review lets the Supreme Court and High Courts strike down laws and executive actions that violate the Constitution. It is rooted in Articles 13, 32 and 226 and is itself part of the basic structure.",
        )
        .with_strategy(
            "Contrast judicial review with judicial activism and judicial overreach, each with one example.",
        ),
        Concept::new(
            "basic structure",
            "The basic structure doctrine (Kesavananda Bharati, 1973) holds that Parliament may amend any part of the Constitution but cannot destroy its essential features such as secularism, democracy and judicial review.",
        ),
        Concept::new(
            "emergency provisions",
            "Part XVIII provides for National Emergency (Article 352), President's Rule (Article 356) and Financial Emergency (Article 360). The 44th Amendment added safeguards after the 1975 Emergency.",
        ),
    ],
    focus_areas: &[
        "Constitutional framework: Preamble, Fundamental Rights, DPSP, Fundamental Duties",
        "Union and State executive, Parliament and State legislatures",
        "Judiciary and landmark judgments",
        "Local government, constitutional and statutory bodies",
    ],
    sources: &[
        "M. Laxmikanth - Indian Polity",
        "D.D. Basu - Introduction to the Constitution of India",
        "The bare text of the Constitution",
    ],
};

const ECONOMY: KnowledgeEntry = KnowledgeEntry {
    topic: TopicId::Economy,
    keywords: &[
        "economy",
        "economic",
        "gdp",
        "inflation",
        "budget",
        "fiscal",
        "monetary",
        "banking",
        "rbi",
        "taxation",
        "growth",
        "trade deficit",
        "unemployment",
    ],
    concepts: &[
        Concept::new(
            "inflation",
            "Inflation is a sustained rise in the general price level, measured in India mainly through CPI (the RBI's target, 4% +/- 2%) and WPI. It can be demand-pull, cost-push or structural.",
        )
        .with_analysis(
            "Food inflation drives much of India's CPI volatility, which limits what monetary policy alone can achieve. Supply-side measures such as buffer stocks and import duty changes complement rate decisions.",
        )
        .with_strategy(
            "Know the difference between CPI and WPI baskets, the Monetary Policy Committee structure and the latest inflation figures from the Economic Survey.",
        ),
        Concept::new(
            "fiscal deficit",
            "Fiscal deficit is the excess of total expenditure over total receipts excluding borrowings. It indicates the government's total borrowing requirement for the year. The FRBM Act sets targets for bringing it down.",
        )
        .with_analysis(
            "High deficits can crowd out private investment and raise interest costs, but counter-cyclical spending is justified during downturns.",
        ),
        Concept::new(
            "monetary policy",
            "Monetary policy is run by the RBI's six-member Monetary Policy Committee using the repo rate, reverse repo, CRR, SLR and open market operations to manage liquidity and inflation.",
        ),
        Concept::new(
            "gst",
            "The Goods and Services Tax (101st Amendment, 2016) replaced multiple indirect taxes with a destination-based tax. The GST Council, chaired by the Union Finance Minister, recommends rates and rules.",
        )
        .with_strategy(
            "Revise the GST Council's voting structure and the compensation cess debate; both are common Mains angles.",
        ),
        Concept::new(
            "repo rate",
            "The repo rate is the rate at which the RBI lends short-term funds to commercial banks against government securities. It is the main signal of the monetary policy stance.",
        ),
        Concept::new(
            "demographic dividend",
            "Demographic dividend is the growth potential from a large working-age population. India's window is expected to last until around 2055, provided skilling and job creation keep pace.",
        ),
    ],
    focus_areas: &[
        "National income accounting and growth",
        "Money, banking and monetary policy",
        "Public finance: budget, taxation and deficits",
        "External sector, agriculture and infrastructure",
    ],
    sources: &[
        "Ramesh Singh - Indian Economy",
        "Economic Survey and Union Budget highlights",
        "NCERT Macroeconomics (Class XII)",
    ],
};

const GEOGRAPHY: KnowledgeEntry = KnowledgeEntry {
    topic: TopicId::Geography,
    keywords: &[
        "geography",
        "monsoon",
        "river",
        "climate",
        "plateau",
        "himalaya",
        "soil",
        "earthquake",
        "cyclone",
        "ocean",
        "latitude",
        "rainfall",
    ],
    concepts: &[
        Concept::new(
            "monsoon",
            "The Indian monsoon is a seasonal reversal of winds. In summer, intense heating of the landmass creates a low-pressure zone that draws moisture-laden south-west winds from the Indian Ocean; in winter the flow reverses to the north-east. The shift of the ITCZ, the Tibetan plateau's heating and the tropical easterly jet all shape its onset and strength.",
        )
        .with_analysis(
            "Around 70% of India's annual rainfall arrives during the south-west monsoon, so its timing affects kharif output, rural demand and reservoir levels. Phenomena such as El Nino and the Indian Ocean Dipole influence year-to-year variability.",
        )
        .with_strategy(
            "Draw the monsoon wind map from memory, learn the two branches (Arabian Sea and Bay of Bengal) and link the topic to agriculture and disaster management for Mains.",
        ),
        Concept::new(
            "el nino",
            "El Nino is the periodic warming of the central and eastern Pacific Ocean. It weakens the Walker circulation and is often associated with below-normal monsoon rainfall in India.",
        ),
        Concept::new(
            "plate tectonics",
            "Plate tectonics explains the movement of lithospheric plates over the asthenosphere. The collision of the Indian and Eurasian plates raised the Himalayas and still causes earthquakes in the region.",
        )
        .with_analysis(
            "Convergent, divergent and transform boundaries each produce distinct landforms, which is a favourite Prelims theme.",
        ),
        Concept::new(
            "western ghats",
            "The Western Ghats are a continuous mountain chain along the west coast and a UNESCO World Heritage Site. They act as a barrier to the south-west monsoon, creating heavy rainfall on the windward side.",
        ),
        Concept::new(
            "jet stream",
            "Jet streams are narrow bands of fast upper-atmosphere winds. The shift of the subtropical westerly jet north of the Himalayas helps trigger the onset of the Indian monsoon.",
        ),
    ],
    focus_areas: &[
        "Physical geography: geomorphology, climatology, oceanography",
        "Indian geography: relief, drainage, climate, soils",
        "Human and economic geography",
        "Mapping of places in news",
    ],
    sources: &[
        "NCERT Fundamentals of Physical Geography (Class XI)",
        "G.C. Leong - Certificate Physical and Human Geography",
        "A good atlas",
    ],
};

const HISTORY: KnowledgeEntry = KnowledgeEntry {
    topic: TopicId::History,
    keywords: &[
        "history",
        "historical",
        "ancient",
        "medieval",
        "mughal",
        "freedom struggle",
        "colonial",
        "harappa",
        "maurya",
        "gandhi",
        "revolt",
        "british",
    ],
    concepts: &[
        Concept::new(
            "indus valley civilization",
            "The Indus Valley (Harappan) Civilization flourished around 2600-1900 BCE with planned cities such as Harappa, Mohenjo-daro and Dholavira, grid streets, drainage systems and standardised weights.",
        )
        .with_strategy(
            "Map the major sites and remember one distinctive find for each; Prelims frequently asks about site-specific features.",
        ),
        Concept::new(
            "revolt of 1857",
            "The Revolt of 1857 began as a sepoy mutiny at Meerut and spread across north India. Its causes were political, economic, social and military; it ended Company rule and brought India under the Crown.",
        )
        .with_analysis(
            "Historians differ on whether it was a mutiny, a feudal reaction or the first war of independence; Mains questions often ask you to weigh these views.",
        ),
        Concept::new(
            "non-cooperation movement",
            "The Non-Cooperation Movement (1920-22), led by Gandhi, called for boycotting British institutions, goods and titles. It was withdrawn after the Chauri Chaura incident.",
        ),
        Concept::new(
            "quit india movement",
            "The Quit India Movement (August 1942) demanded an immediate end to British rule with the slogan 'Do or Die'. Leaders were arrested at once and the movement turned into a largely leaderless mass uprising.",
        ),
        Concept::new(
            "mauryan empire",
            "The Mauryan Empire (c. 322-185 BCE), founded by Chandragupta Maurya, was the first pan-Indian empire. Ashoka's edicts spread the idea of Dhamma across the subcontinent.",
        ),
        Concept::new(
            "bhakti movement",
            "The Bhakti movement emphasised personal devotion over ritual, spreading from the Alvars and Nayanars of the south to saints such as Kabir, Mirabai and Tulsidas in the north.",
        ),
    ],
    focus_areas: &[
        "Ancient India: Harappan, Vedic, Mauryan and Gupta periods",
        "Medieval India: Delhi Sultanate, Mughals, Bhakti and Sufi movements",
        "Modern India: the freedom struggle from 1857 to 1947",
        "Art and culture",
    ],
    sources: &[
        "NCERT Themes in Indian History",
        "Spectrum - A Brief History of Modern India",
        "Nitin Singhania - Indian Art and Culture",
    ],
};

const ENVIRONMENT: KnowledgeEntry = KnowledgeEntry {
    topic: TopicId::Environment,
    keywords: &[
        "environment",
        "ecology",
        "biodiversity",
        "pollution",
        "climate change",
        "conservation",
        "wildlife",
        "forest",
        "emission",
        "ecosystem",
    ],
    concepts: &[
        Concept::new(
            "paris agreement",
            "The Paris Agreement (2015) aims to limit warming to well below 2 degrees Celsius, pursuing 1.5 degrees. Countries submit Nationally Determined Contributions and update them every five years.",
        )
        .with_analysis(
            "India's updated targets include net zero by 2070 and 50% of installed power capacity from non-fossil sources by 2030.",
        ),
        Concept::new(
            "carbon credit",
            "A carbon credit represents one tonne of CO2-equivalent reduced or removed. Credits can be traded under compliance markets or voluntary schemes such as India's Carbon Credit Trading Scheme.",
        ),
        Concept::new(
            "biodiversity hotspot",
            "A biodiversity hotspot has at least 1,500 endemic vascular plant species and has lost at least 70% of its original habitat. India hosts parts of four: the Himalaya, Indo-Burma, the Western Ghats and Sri Lanka, and Sundaland.",
        ),
        Concept::new(
            "ozone depletion",
            "Ozone depletion is the thinning of the stratospheric ozone layer by chlorofluorocarbons and related chemicals. The Montreal Protocol and its Kigali Amendment regulate these substances.",
        ),
        Concept::new(
            "wetlands",
            "Wetlands are areas saturated with water that support distinct ecosystems. The Ramsar Convention designates wetlands of international importance, and India has more than 80 Ramsar sites.",
        )
        .with_strategy(
            "Track newly added Ramsar sites each year; they appear regularly in Prelims.",
        ),
    ],
    focus_areas: &[
        "Ecology and ecosystems",
        "Biodiversity and conservation",
        "Climate change and international conventions",
        "Environmental laws and institutions",
    ],
    sources: &[
        "Shankar IAS - Environment",
        "Ministry of Environment, Forest and Climate Change reports",
    ],
};

const INTERNATIONAL_RELATIONS: KnowledgeEntry = KnowledgeEntry {
    topic: TopicId::InternationalRelations,
    keywords: &[
        "foreign policy",
        "international relations",
        "bilateral",
        "diplomacy",
        "treaty",
        "united nations",
        "neighbour",
        "geopolitics",
        "summit",
        "g20",
        "brics",
    ],
    concepts: &[
        Concept::new(
            "non-alignment",
            "Non-alignment was India's Cold War policy of staying out of both military blocs while engaging with each. Nehru, Nasser and Tito shaped the Non-Aligned Movement founded in 1961.",
        )
        .with_analysis(
            "Its successor idea, strategic autonomy, lets India partner with the US in the Quad while keeping ties with Russia and joining BRICS.",
        ),
        Concept::new(
            "act east policy",
            "The Act East Policy (2014) upgraded the Look East Policy to deepen economic, strategic and cultural ties with South-East Asia and the Indo-Pacific, with ASEAN at its centre.",
        ),
        Concept::new(
            "neighbourhood first",
            "Neighbourhood First prioritises relations with South Asian neighbours through connectivity, trade and development assistance.",
        ),
        Concept::new(
            "strategic autonomy",
            "Strategic autonomy is the ability to pursue national interests without being bound to any single power, through issue-based partnerships.",
        ),
    ],
    focus_areas: &[
        "India and its neighbourhood",
        "Bilateral, regional and global groupings",
        "International institutions and their mandates",
        "Effect of other countries' policies on India's interests",
    ],
    sources: &[
        "Ministry of External Affairs annual reports",
        "Rajiv Sikri - Challenge and Strategy",
    ],
};

const SCIENCE_TECHNOLOGY: KnowledgeEntry = KnowledgeEntry {
    topic: TopicId::ScienceTechnology,
    keywords: &[
        "science",
        "technology",
        "isro",
        "space",
        "biotechnology",
        "nuclear",
        "satellite",
        "cyber",
        "artificial intelligence",
        "vaccine",
        "nanotechnology",
    ],
    concepts: &[
        Concept::new(
            "chandrayaan",
            "Chandrayaan is ISRO's lunar exploration programme. Chandrayaan-3 made India the first country to soft-land near the Moon's south pole in August 2023.",
        )
        .with_strategy(
            "Keep a list of recent ISRO missions with their launch vehicle, orbit and objective.",
        ),
        Concept::new(
            "crispr",
            "CRISPR-Cas9 is a gene-editing tool that uses a guide RNA to cut DNA at a chosen site, enabling precise modification of genes.",
        )
        .with_analysis(
            "Applications range from disease-resistant crops to sickle-cell therapy; ethical concerns centre on germline editing.",
        ),
        Concept::new(
            "quantum computing",
            "Quantum computing uses qubits, superposition and entanglement to solve certain problems far faster than classical computers. India's National Quantum Mission supports research in the field.",
        ),
        Concept::new(
            "blockchain",
            "Blockchain is a distributed ledger where records are grouped into cryptographically linked blocks, making them tamper-evident without a central authority.",
        ),
    ],
    focus_areas: &[
        "Space and defence technology",
        "Biotechnology and health",
        "IT, communication and emerging technologies",
        "Intellectual property and technology policy",
    ],
    sources: &[
        "PIB science releases",
        "The Hindu science and technology page",
    ],
};

const ETHICS: KnowledgeEntry = KnowledgeEntry {
    topic: TopicId::Ethics,
    keywords: &[
        "ethics",
        "ethical",
        "integrity",
        "moral",
        "values",
        "probity",
        "civil servant",
        "accountability",
        "transparency",
    ],
    concepts: &[
        Concept::new(
            "emotional intelligence",
            "Emotional intelligence is the ability to recognise and manage one's own emotions and those of others. Goleman's model lists self-awareness, self-regulation, motivation, empathy and social skills.",
        )
        .with_strategy(
            "Use short administrative anecdotes to show emotional intelligence in case studies rather than quoting definitions.",
        ),
        Concept::new(
            "conflict of interest",
            "A conflict of interest arises when a public servant's private interests could improperly influence official duties. Disclosure and recusal are the standard remedies.",
        ),
        Concept::new(
            "conscience",
            "Conscience is the inner sense of right and wrong that guides action when rules are silent. It is distinct from law, although the two often overlap.",
        ),
        Concept::new(
            "code of conduct",
            "A code of conduct lists specific dos and don'ts for public servants, while a code of ethics states broader values such as integrity, impartiality and compassion.",
        ),
    ],
    focus_areas: &[
        "Ethics and human interface",
        "Attitude, aptitude and foundational values for civil service",
        "Emotional intelligence and moral thinkers",
        "Probity in governance and case studies",
    ],
    sources: &[
        "Lexicon for Ethics, Integrity and Aptitude",
        "2nd ARC report on Ethics in Governance",
    ],
};

const CSAT: KnowledgeEntry = KnowledgeEntry {
    topic: TopicId::Csat,
    keywords: &[
        "csat",
        "reasoning",
        "aptitude",
        "comprehension",
        "puzzle",
        "data interpretation",
        "quantitative",
        "percentage",
        "probability",
    ],
    concepts: &[
        Concept::new(
            "syllogism",
            "A syllogism draws a conclusion from two premises. Represent each statement with Venn diagrams and accept a conclusion only if it holds in every possible diagram.",
        ),
        Concept::new(
            "blood relations",
            "Blood relation questions describe family links indirectly. Draw a family tree with generations on separate levels and mark gender explicitly.",
        ),
        Concept::new(
            "time and work",
            "In time and work problems, convert each worker's rate to work per day, add rates for people working together and take the reciprocal to get the total time.",
        )
        .with_strategy(
            "Practise with the LCM method: take total work as the LCM of individual times to avoid fractions.",
        ),
        Concept::new(
            "number series",
            "Number series questions hide a rule in a sequence. Check differences, ratios, squares and cubes, and alternating patterns in that order.",
        ),
    ],
    focus_areas: &[
        "Reading comprehension",
        "Logical reasoning and analytical ability",
        "Basic numeracy and data interpretation",
        "Decision making",
    ],
    sources: &[
        "Previous year CSAT papers",
        "R.S. Aggarwal - Quantitative Aptitude",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn builtin_covers_every_topic() {
        for topic in TopicId::iter() {
            assert!(KNOWLEDGE.get(topic).is_some(), "missing topic {topic}");
        }
    }

    #[test]
    fn table_order_starts_with_polity() {
        let order: Vec<TopicId> = KNOWLEDGE.entries().iter().map(|e| e.topic).collect();
        assert_eq!(order[0], TopicId::Polity);
        assert_eq!(order[1], TopicId::Economy);
    }

    #[test]
    fn keywords_and_concepts_are_lowercase() {
        for entry in KNOWLEDGE.entries() {
            for kw in entry.keywords {
                assert_eq!(*kw, kw.to_lowercase());
            }
            for concept in entry.concepts {
                assert_eq!(concept.phrase, concept.phrase.to_lowercase());
                assert!(!concept.explanation.is_empty());
            }
        }
    }

    #[test]
    fn topic_keys_parse_back() {
        use std::str::FromStr;
        assert_eq!(TopicId::from_str("international-relations").unwrap(), TopicId::InternationalRelations);
        assert_eq!(TopicId::ScienceTechnology.key(), "science-technology");
    }

    #[test]
    fn concept_lookup_by_phrase() {
        let polity = KNOWLEDGE.get(TopicId::Polity).unwrap();
        let federalism = polity.concept("federalism").unwrap();
        assert!(federalism.analysis.is_some());
        assert!(polity.concept("separation of powers").unwrap().strategy.is_none());
    }
}
