use crate::db::operations::words::{self, Difficulty, ReviewState, WordDraft};
use crate::db::{Database, WordStoreError};

struct SeedWord {
    word: &'static str,
    meaning: &'static str,
    example: &'static str,
    image: &'static str,
    audio: &'static str,
    difficulty: &'static str,
}

/// The built-in vocabulary set. Image/audio values are opaque asset
/// references resolved by the app's media loader from the filename stem.
const SEED_WORDS: &[SeedWord] = &[
    SeedWord {
        word: "abate",
        meaning: "to become less strong or decrease in intensity",
        example: "After the storm, the winds began to abate by evening.",
        image: "src/image/abate.png",
        audio: "src/audio/abate.mp3",
        difficulty: "Medium",
    },
    SeedWord {
        word: "benevolent",
        meaning: "well-meaning and kindly",
        example: "The benevolent donor funded scholarships for local students.",
        image: "src/image/benevolent.png",
        audio: "src/audio/benevolent.mp3",
        difficulty: "Medium",
    },
    SeedWord {
        word: "candid",
        meaning: "truthful and straightforward; frank",
        example: "She gave a candid review of the proposal, highlighting strengths and weaknesses.",
        image: "src/image/candid.png",
        audio: "src/audio/candid.mp3",
        difficulty: "Medium",
    },
    SeedWord {
        word: "diligent",
        meaning: "showing care and conscientiousness in one's work or duties",
        example: "Through diligent study, he mastered the material before the exam.",
        image: "src/image/diligent.png",
        audio: "src/audio/diligent.mp3",
        difficulty: "Medium",
    },
    SeedWord {
        word: "eloquent",
        meaning: "fluent or persuasive in speaking or writing",
        example: "The speaker delivered an eloquent address that moved the audience.",
        image: "src/image/eloquent.png",
        audio: "src/audio/eloquent.mp3",
        difficulty: "Medium",
    },
    SeedWord {
        word: "frugal",
        meaning: "economical or thrifty; sparing with money or resources",
        example: "Living a frugal lifestyle helped the couple save for a home.",
        image: "src/image/frugal.png",
        audio: "src/audio/frugal.mp3",
        difficulty: "Medium",
    },
    SeedWord {
        word: "gregarious",
        meaning: "fond of company; sociable",
        example: "As a gregarious host, he made sure every guest felt welcome.",
        image: "src/image/gregarious.png",
        audio: "src/audio/gregarious.mp3",
        difficulty: "Medium",
    },
    SeedWord {
        word: "hypothesis",
        meaning: "a proposed explanation made on the basis of limited evidence",
        example: "The scientist tested her hypothesis through multiple controlled experiments.",
        image: "src/image/hypothesis.png",
        audio: "src/audio/hypothesis.mp3",
        difficulty: "Hard",
    },
    SeedWord {
        word: "impeccable",
        meaning: "in accordance with the highest standards; faultless",
        example: "His impeccable manners impressed everyone at the dinner.",
        image: "src/image/impeccable.png",
        audio: "src/audio/impeccable.mp3",
        difficulty: "Hard",
    },
    SeedWord {
        word: "jovial",
        meaning: "cheerful and friendly",
        example: "Her jovial laugh filled the room with warmth.",
        image: "src/image/jovial.png",
        audio: "src/audio/jovial.mp3",
        difficulty: "Medium",
    },
    SeedWord {
        word: "adapt",
        meaning: "to adjust to new conditions",
        example: "Students must adapt to new study routines after term starts.",
        image: "src/image/adapt.png",
        audio: "src/audio/adapt.mp3",
        difficulty: "Easy",
    },
    SeedWord {
        word: "brief",
        meaning: "short in duration or concise in expression",
        example: "The teacher gave a brief summary of the chapter.",
        image: "src/image/brief.png",
        audio: "src/audio/brief.mp3",
        difficulty: "Easy",
    },
    SeedWord {
        word: "calm",
        meaning: "free from agitation or strong emotion",
        example: "She took a deep breath to stay calm during the exam.",
        image: "src/image/calm.png",
        audio: "src/audio/calm.mp3",
        difficulty: "Easy",
    },
    SeedWord {
        word: "eager",
        meaning: "strongly wanting to do or have something",
        example: "He was eager to share his project with the class.",
        image: "src/image/eager.png",
        audio: "src/audio/eager.mp3",
        difficulty: "Easy",
    },
    SeedWord {
        word: "focus",
        meaning: "to concentrate attention or effort",
        example: "It is important to focus on studying for the final test.",
        image: "src/image/focus.png",
        audio: "src/audio/focus.mp3",
        difficulty: "Easy",
    },
    SeedWord {
        word: "glance",
        meaning: "to take a quick or brief look",
        example: "She stole a quick glance at the clock during the lecture.",
        image: "src/image/glance.png",
        audio: "src/audio/glance.mp3",
        difficulty: "Easy",
    },
    SeedWord {
        word: "humble",
        meaning: "having or showing a modest or low view of one's importance",
        example: "Despite his success, he remained humble and approachable.",
        image: "src/image/humble.png",
        audio: "src/audio/humble.mp3",
        difficulty: "Easy",
    },
    SeedWord {
        word: "instant",
        meaning: "happening immediately",
        example: "With an instant reply, he confirmed his attendance.",
        image: "src/image/instant.png",
        audio: "src/audio/instant.mp3",
        difficulty: "Easy",
    },
    SeedWord {
        word: "keen",
        meaning: "having or showing eagerness or enthusiasm",
        example: "She is keen to join the debate club this semester.",
        image: "src/image/keen.png",
        audio: "src/audio/keen.mp3",
        difficulty: "Easy",
    },
    SeedWord {
        word: "local",
        meaning: "relating to a particular area or neighborhood",
        example: "They bought fruits from the local market on Saturday.",
        image: "src/image/local.png",
        audio: "src/audio/local.mp3",
        difficulty: "Easy",
    },
    SeedWord {
        word: "minor",
        meaning: "lesser in importance, seriousness, or significance",
        example: "The students noted a minor mistake in the worksheet.",
        image: "src/image/minor.png",
        audio: "src/audio/minor.mp3",
        difficulty: "Easy",
    },
    SeedWord {
        word: "noble",
        meaning: "having high moral qualities or ideals",
        example: "Her noble actions earned her the admiration of peers.",
        image: "src/image/noble.png",
        audio: "src/audio/noble.mp3",
        difficulty: "Easy",
    },
    SeedWord {
        word: "proud",
        meaning: "feeling deep pleasure from achievements",
        example: "He felt proud when he completed the science project.",
        image: "src/image/proud.png",
        audio: "src/audio/proud.mp3",
        difficulty: "Easy",
    },
    SeedWord {
        word: "quick",
        meaning: "moving or doing something with speed",
        example: "He gave a quick response to the teacher's question.",
        image: "src/image/quick.png",
        audio: "src/audio/quick.mp3",
        difficulty: "Easy",
    },
    SeedWord {
        word: "rare",
        meaning: "not occurring very often; uncommon",
        example: "It is rare to see snow in this region.",
        image: "src/image/rare.png",
        audio: "src/audio/rare.mp3",
        difficulty: "Easy",
    },
    SeedWord {
        word: "solid",
        meaning: "firm and stable in shape; reliable",
        example: "She gave a solid argument that convinced the class.",
        image: "src/image/solid.png",
        audio: "src/audio/solid.mp3",
        difficulty: "Easy",
    },
    SeedWord {
        word: "tidy",
        meaning: "neat and in good order",
        example: "Please keep your desk tidy before leaving the room.",
        image: "src/image/tidy.png",
        audio: "src/audio/tidy.mp3",
        difficulty: "Easy",
    },
    SeedWord {
        word: "vague",
        meaning: "not clearly expressed or understood",
        example: "His instructions were vague, so we asked for clarification.",
        image: "src/image/vague.png",
        audio: "src/audio/vague.mp3",
        difficulty: "Easy",
    },
    SeedWord {
        word: "simple",
        meaning: "easily understood or done; not complex",
        example: "The teacher used a simple example to explain the concept.",
        image: "src/image/simple.png",
        audio: "src/audio/simple.mp3",
        difficulty: "Easy",
    },
    SeedWord {
        word: "gentle",
        meaning: "soft or mild in nature",
        example: "She gave the puppy a gentle pet on the head.",
        image: "src/image/gentle.png",
        audio: "src/audio/gentle.mp3",
        difficulty: "Easy",
    },
    SeedWord {
        word: "mitigate",
        meaning: "to make less severe, serious, or painful",
        example: "They tried to mitigate the effects of the flood by building barriers.",
        image: "src/image/mitigate.png",
        audio: "src/audio/mitigate.mp3",
        difficulty: "Medium",
    },
    SeedWord {
        word: "novice",
        meaning: "a person new to or inexperienced in a field",
        example: "The novice musician practiced every day to improve.",
        image: "src/image/novice.png",
        audio: "src/audio/novice.mp3",
        difficulty: "Medium",
    },
    SeedWord {
        word: "obscure",
        meaning: "not discovered or known about; uncertain",
        example: "The origin of the tradition remains obscure to historians.",
        image: "src/image/obscure.png",
        audio: "src/audio/obscure.mp3",
        difficulty: "Medium",
    },
    SeedWord {
        word: "pragmatic",
        meaning: "dealing with things sensibly and realistically",
        example: "She offered a pragmatic solution to the scheduling conflict.",
        image: "src/image/pragmatic.png",
        audio: "src/audio/pragmatic.mp3",
        difficulty: "Medium",
    },
    SeedWord {
        word: "redundant",
        meaning: "not or no longer needed; superfluous",
        example: "The editor removed redundant phrases to make the text clearer.",
        image: "src/image/redundant.png",
        audio: "src/audio/redundant.mp3",
        difficulty: "Medium",
    },
    SeedWord {
        word: "subtle",
        meaning: "so delicate or precise as to be difficult to analyze",
        example: "There was a subtle change in his expression after the announcement.",
        image: "src/image/subtle.png",
        audio: "src/audio/subtle.mp3",
        difficulty: "Medium",
    },
    SeedWord {
        word: "tentative",
        meaning: "not certain or fixed; provisional",
        example: "They made a tentative plan for the weekend trip.",
        image: "src/image/tentative.png",
        audio: "src/audio/tentative.mp3",
        difficulty: "Medium",
    },
    SeedWord {
        word: "viable",
        meaning: "capable of working successfully; feasible",
        example: "The team proposed a viable method for reducing waste.",
        image: "src/image/viable.png",
        audio: "src/audio/viable.mp3",
        difficulty: "Medium",
    },
    SeedWord {
        word: "mundane",
        meaning: "lacking interest or excitement; dull",
        example: "The assignment felt mundane compared to the creative project.",
        image: "src/image/mundane.png",
        audio: "src/audio/mundane.mp3",
        difficulty: "Medium",
    },
    SeedWord {
        word: "potent",
        meaning: "having great power, influence, or effect",
        example: "The new policy had a potent effect on school attendance.",
        image: "src/image/potent.png",
        audio: "src/audio/potent.mp3",
        difficulty: "Medium",
    },
    SeedWord {
        word: "robust",
        meaning: "strong and healthy; vigorous",
        example: "The new program includes a robust set of exercises.",
        image: "src/image/robust.png",
        audio: "src/audio/robust.mp3",
        difficulty: "Medium",
    },
    SeedWord {
        word: "serene",
        meaning: "calm, peaceful, and untroubled",
        example: "They enjoyed the serene view of the lake at sunset.",
        image: "src/image/serene.png",
        audio: "src/audio/serene.mp3",
        difficulty: "Medium",
    },
    SeedWord {
        word: "aberration",
        meaning: "a departure from what is normal, usual, or expected",
        example: "The test result was an aberration and did not match the rest of the data.",
        image: "src/image/aberration.png",
        audio: "src/audio/aberration.mp3",
        difficulty: "Hard",
    },
    SeedWord {
        word: "ambivalent",
        meaning: "having mixed feelings or contradictory ideas about something",
        example: "She felt ambivalent about moving to a new city for college.",
        image: "src/image/ambivalent.png",
        audio: "src/audio/ambivalent.mp3",
        difficulty: "Hard",
    },
    SeedWord {
        word: "cacophony",
        meaning: "a harsh, discordant mixture of sounds",
        example: "The construction site produced a cacophony that made concentration difficult.",
        image: "src/image/cacophony.png",
        audio: "src/audio/cacophony.mp3",
        difficulty: "Hard",
    },
    SeedWord {
        word: "deleterious",
        meaning: "causing harm or damage",
        example: "Certain chemicals can have deleterious effects on the environment.",
        image: "src/image/deleterious.png",
        audio: "src/audio/deleterious.mp3",
        difficulty: "Hard",
    },
    SeedWord {
        word: "enigma",
        meaning: "a person or thing that is mysterious or difficult to understand",
        example: "The ancient inscription remained an enigma to researchers.",
        image: "src/image/enigma.png",
        audio: "src/audio/enigma.mp3",
        difficulty: "Hard",
    },
    SeedWord {
        word: "fastidious",
        meaning: "very attentive to and concerned about accuracy and detail",
        example: "Her fastidious approach made the project flawless.",
        image: "src/image/fastidious.png",
        audio: "src/audio/fastidious.mp3",
        difficulty: "Hard",
    },
    SeedWord {
        word: "juxtapose",
        meaning: "place or deal with close together for contrasting effect",
        example: "The artist chose to juxtapose bright colors with muted tones.",
        image: "src/image/juxtapose.png",
        audio: "src/audio/juxtapose.mp3",
        difficulty: "Hard",
    },
    SeedWord {
        word: "laconic",
        meaning: "using very few words",
        example: "His laconic response indicated that he wanted to leave quickly.",
        image: "src/image/laconic.png",
        audio: "src/audio/laconic.mp3",
        difficulty: "Hard",
    },
    SeedWord {
        word: "magnanimous",
        meaning: "very generous or forgiving, especially toward a rival",
        example: "She was magnanimous in victory and praised her opponent's effort.",
        image: "src/image/magnanimous.png",
        audio: "src/audio/magnanimous.mp3",
        difficulty: "Hard",
    },
    SeedWord {
        word: "nefarious",
        meaning: "wicked or criminal",
        example: "The scheme was exposed as a nefarious attempt to manipulate votes.",
        image: "src/image/nefarious.png",
        audio: "src/audio/nefarious.mp3",
        difficulty: "Hard",
    },
    SeedWord {
        word: "obsequious",
        meaning: "obedient or attentive to an excessive or servile degree",
        example: "The assistant's obsequious behavior made colleagues uncomfortable.",
        image: "src/image/obsequious.png",
        audio: "src/audio/obsequious.mp3",
        difficulty: "Hard",
    },
    SeedWord {
        word: "panacea",
        meaning: "a solution or remedy for all difficulties or diseases",
        example: "There is no panacea that can solve every social problem overnight.",
        image: "src/image/panacea.png",
        audio: "src/audio/panacea.mp3",
        difficulty: "Hard",
    },
    SeedWord {
        word: "quixotic",
        meaning: "exceedingly idealistic; unrealistic and impractical",
        example: "Their quixotic plan to change the system overnight was charming but unlikely.",
        image: "src/image/quixotic.png",
        audio: "src/audio/quixotic.mp3",
        difficulty: "Hard",
    },
    SeedWord {
        word: "relegate",
        meaning: "consign or dismiss to an inferior rank or position",
        example: "The manager chose to relegate routine tasks to less experienced staff.",
        image: "src/image/relegate.png",
        audio: "src/audio/relegate.mp3",
        difficulty: "Hard",
    },
    SeedWord {
        word: "salient",
        meaning: "most noticeable or important",
        example: "The report highlighted the salient points for discussion in class.",
        image: "src/image/salient.png",
        audio: "src/audio/salient.mp3",
        difficulty: "Hard",
    },
    SeedWord {
        word: "tenacious",
        meaning: "tending to keep a firm hold of something; persistent",
        example: "Her tenacious attitude helped her finish the difficult project.",
        image: "src/image/tenacious.png",
        audio: "src/audio/tenacious.mp3",
        difficulty: "Hard",
    },
    SeedWord {
        word: "ubiquitous",
        meaning: "present, appearing, or found everywhere",
        example: "Mobile phones have become ubiquitous among students.",
        image: "src/image/ubiquitous.png",
        audio: "src/audio/ubiquitous.mp3",
        difficulty: "Hard",
    },
    SeedWord {
        word: "vacillate",
        meaning: "alternate or waver between different opinions or actions",
        example: "He may vacillate between study options before choosing a major.",
        image: "src/image/vacillate.png",
        audio: "src/audio/vacillate.mp3",
        difficulty: "Hard",
    },];

/// Bulk-imports the built-in word list when the table is empty. A non-empty
/// table skips the import entirely, so repeated startup calls never
/// duplicate rows. Individual row failures are logged and skipped rather
/// than aborting startup.
pub async fn seed_words_if_empty(db: &Database) -> Result<(), WordStoreError> {
    let count = words::count_words(db).await?;
    if count > 0 {
        tracing::debug!(count, "word store already populated, skipping seed");
        return Ok(());
    }

    tracing::info!(total = SEED_WORDS.len(), "seeding built-in word list");

    for seed in SEED_WORDS {
        let draft = WordDraft {
            word: seed.word.to_string(),
            meaning: seed.meaning.to_string(),
            example: Some(seed.example.to_string()),
            image: Some(seed.image.to_string()),
            audio: Some(seed.audio.to_string()),
            difficulty: Difficulty::parse(seed.difficulty),
            favorite: false,
            review_state: ReviewState::NotStarted,
        };

        if let Err(err) = words::add_word(db, &draft).await {
            tracing::warn!(word = seed.word, error = %err, "failed to seed word");
        }
    }

    Ok(())
}
