// src/catalog.rs

use chrono::{Datelike, NaiveDate};

use crate::models::trivia::{Album, SongMeaning, TriviaFact, UpcomingEvent};

fn fact(fact: &str, category: &str, icon: &str) -> TriviaFact {
    TriviaFact {
        fact: fact.to_string(),
        category: category.to_string(),
        icon: icon.to_string(),
    }
}

/// The static trivia fact pool the daily pick draws from.
pub fn trivia_facts() -> Vec<TriviaFact> {
    vec![
        fact(
            "Taylor Swift was born on December 13, 1989, in Reading, Pennsylvania.",
            "Personal",
            "🎂",
        ),
        fact(
            "Taylor's first job was at a Christmas tree farm when she was 11 years old.",
            "Early Life",
            "🌲",
        ),
        fact(
            "Taylor learned to play guitar when she was 12 years old.",
            "Music",
            "🎸",
        ),
        fact(
            "Taylor's lucky number is 13, which is why she often incorporates it into her work.",
            "Fun Facts",
            "13️⃣",
        ),
        fact(
            "Taylor has won 12 Grammy Awards, including 3 Album of the Year wins.",
            "Achievements",
            "🏆",
        ),
        fact(
            "Taylor's cat, Olivia Benson, is named after Mariska Hargitay's character on Law & Order: SVU.",
            "Pets",
            "🐱",
        ),
        fact(
            "Taylor wrote her first song, 'Lucky You', when she was 12 years old.",
            "Songwriting",
            "✍️",
        ),
        fact(
            "Taylor's favorite color is purple, which is why it appears in many of her album covers.",
            "Personal",
            "💜",
        ),
        fact(
            "Taylor has a degree in English Literature from New York University.",
            "Education",
            "🎓",
        ),
        fact(
            "Taylor's song 'Tim McGraw' was inspired by her high school crush who was going to college.",
            "Songwriting",
            "💕",
        ),
        fact(
            "Taylor has performed at the Super Bowl halftime show in 2024.",
            "Performances",
            "🏈",
        ),
        fact(
            "Taylor's album '1989' is named after her birth year.",
            "Albums",
            "📅",
        ),
        fact(
            "Taylor has written songs for other artists including Little Big Town and Sugarland.",
            "Songwriting",
            "🎵",
        ),
        fact(
            "Taylor's favorite food is cheeseburgers and fries.",
            "Personal",
            "🍔",
        ),
        fact(
            "Taylor has a fear of sea urchins, which she mentions in her song 'Clean'.",
            "Fun Facts",
            "🌊",
        ),
    ]
}

fn album(
    name: &str,
    release_date: &str,
    genre: &str,
    fun_fact: &str,
    track_count: u32,
    era: &str,
) -> Album {
    Album {
        name: name.to_string(),
        release_date: release_date.to_string(),
        genre: genre.to_string(),
        fun_fact: fun_fact.to_string(),
        track_count,
        era: era.to_string(),
    }
}

/// Full studio-album catalog, Debut through The Tortured Poets Department.
pub fn albums() -> Vec<Album> {
    vec![
        album(
            "Taylor Swift (Debut)",
            "2006-10-24",
            "Country",
            "Taylor wrote 'Tim McGraw' when she was just 16 years old!",
            11,
            "Debut Era",
        ),
        album(
            "Fearless",
            "2008-11-11",
            "Country Pop",
            "Fearless won Album of the Year at the 2010 Grammys, making Taylor the youngest artist to win this award!",
            13,
            "Fearless Era",
        ),
        album(
            "Speak Now",
            "2010-10-25",
            "Country Pop",
            "Taylor wrote every song on this album completely by herself!",
            14,
            "Speak Now Era",
        ),
        album(
            "Red",
            "2012-10-22",
            "Country Pop, Pop Rock",
            "Red was inspired by the 'red' emotions of love - intense, passionate, and sometimes painful.",
            16,
            "Red Era",
        ),
        album(
            "1989",
            "2014-10-27",
            "Pop, Synth-pop",
            "1989 marked Taylor's complete transition from country to pop music!",
            13,
            "1989 Era",
        ),
        album(
            "Reputation",
            "2017-11-10",
            "Pop, Electropop",
            "Reputation was Taylor's response to media scrutiny and public perception.",
            15,
            "Reputation Era",
        ),
        album(
            "Lover",
            "2019-08-23",
            "Pop, Synth-pop",
            "Lover represents the 'golden' era of Taylor's life, filled with love and happiness.",
            18,
            "Lover Era",
        ),
        album(
            "Folklore",
            "2020-07-24",
            "Indie Folk, Alternative",
            "Folklore was written and recorded during the COVID-19 pandemic and was a complete surprise release!",
            16,
            "Folklore Era",
        ),
        album(
            "Evermore",
            "2020-12-11",
            "Indie Folk, Alternative",
            "Evermore is the sister album to Folklore and was also a surprise release!",
            15,
            "Evermore Era",
        ),
        album(
            "Midnights",
            "2022-10-21",
            "Pop, Synth-pop",
            "Midnights explores 13 sleepless nights throughout Taylor's life, released at midnight!",
            13,
            "Midnights Era",
        ),
        album(
            "The Tortured Poets Department",
            "2024-04-19",
            "Pop, Alternative",
            "This album was announced at the 2024 Grammys and features collaborations with Post Malone and Florence + The Machine!",
            16,
            "TTPD Era",
        ),
    ]
}

fn song(song: &str, album: &str, meaning: &str, fun_fact: &str) -> SongMeaning {
    SongMeaning {
        song: song.to_string(),
        album: album.to_string(),
        meaning: meaning.to_string(),
        fun_fact: fun_fact.to_string(),
    }
}

/// Song meanings and backstories shown in the trivia rotation.
pub fn song_meanings() -> Vec<SongMeaning> {
    vec![
        song(
            "Love Story",
            "Fearless",
            "Inspired by Romeo and Juliet, but with a happy ending. Taylor wanted to show that love can overcome obstacles.",
            "The music video was filmed in a castle and features Taylor in a beautiful ballgown!",
        ),
        song(
            "All Too Well",
            "Red",
            "A deeply personal song about a past relationship that Taylor remembers 'all too well' - both the good and the bad.",
            "The original version was 10 minutes long, but was cut down for the album. The full version was later released!",
        ),
        song(
            "Shake It Off",
            "1989",
            "Taylor's response to critics and haters - she's learned to shake off negativity and be herself.",
            "The music video features Taylor dancing in different styles, showing her versatility!",
        ),
        song(
            "Blank Space",
            "1989",
            "Taylor's satirical take on how the media portrays her as a serial dater, playing into the stereotype.",
            "The music video was filmed at Oheka Castle in New York and cost over $1 million to make!",
        ),
        song(
            "Delicate",
            "Reputation",
            "About the early stages of a relationship when you're not sure if the other person feels the same way.",
            "The music video features Taylor dancing alone in various locations, showing vulnerability!",
        ),
        song(
            "Lover",
            "Lover",
            "A romantic ballad about finding true love and wanting to spend forever with that person.",
            "Taylor wrote this song on piano and it's one of her most romantic songs ever!",
        ),
        song(
            "Cardigan",
            "Folklore",
            "Part of the 'teenage love triangle' story, about a girl who feels like an old cardigan under someone's bed.",
            "The music video was directed by Taylor herself and filmed during quarantine!",
        ),
        song(
            "Anti-Hero",
            "Midnights",
            "Taylor's most vulnerable song about her insecurities and self-doubt, calling herself the 'anti-hero' of her own story.",
            "The music video features Taylor playing multiple versions of herself, including a giant version!",
        ),
    ]
}

/// Finds an album by case-insensitive substring match on its name.
pub fn album_by_name(name: &str) -> Option<Album> {
    let needle = name.to_lowercase();
    albums()
        .into_iter()
        .find(|album| album.name.to_lowercase().contains(&needle))
}

/// Sample track list for an album, empty when none is curated.
pub fn songs_by_album(album_name: &str) -> Vec<String> {
    let Some(album) = album_by_name(album_name) else {
        return Vec::new();
    };

    let tracks: &[&str] = match album.name.as_str() {
        "Fearless" => &[
            "Fearless",
            "Fifteen",
            "Love Story",
            "White Horse",
            "You Belong With Me",
        ],
        "Red" => &[
            "State of Grace",
            "Red",
            "Treacherous",
            "I Knew You Were Trouble",
            "All Too Well",
        ],
        "1989" => &[
            "Welcome to New York",
            "Blank Space",
            "Style",
            "Out of the Woods",
            "Shake It Off",
        ],
        "Lover" => &[
            "I Forgot That You Existed",
            "Cruel Summer",
            "Lover",
            "The Man",
            "You Need To Calm Down",
        ],
        _ => &[],
    };

    tracks.iter().map(|t| t.to_string()).collect()
}

/// Upcoming fan-calendar events: Taylor's birthday plus every album's next
/// release anniversary, sorted by date.
pub fn upcoming_events(today: NaiveDate) -> Vec<UpcomingEvent> {
    let mut events = Vec::new();

    if let Some(birthday) = next_occurrence(today, 12, 13) {
        events.push(UpcomingEvent {
            name: "Taylor Swift's Birthday".to_string(),
            date: birthday,
            description: "Celebrate Taylor's birthday!".to_string(),
            icon: "🎉".to_string(),
        });
    }

    for album in albums() {
        let Ok(released) = NaiveDate::parse_from_str(&album.release_date, "%Y-%m-%d") else {
            continue;
        };
        if let Some(anniversary) = next_occurrence(today, released.month(), released.day()) {
            events.push(UpcomingEvent {
                name: format!("{} Anniversary", album.name),
                date: anniversary,
                description: format!("{} anniversary", album.name),
                icon: "🎵".to_string(),
            });
        }
    }

    events.sort_by_key(|e| e.date);
    events
}

/// Next calendar occurrence of `month`/`day` on or after `today`.
fn next_occurrence(today: NaiveDate, month: u32, day: u32) -> Option<NaiveDate> {
    match NaiveDate::from_ymd_opt(today.year(), month, day) {
        Some(date) if date >= today => Some(date),
        _ => NaiveDate::from_ymd_opt(today.year() + 1, month, day),
    }
}
