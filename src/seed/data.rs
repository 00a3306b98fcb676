use crate::catalog::repo_types::{Program, Session, Trainer};

const DAVID_IMAGE: &str = "https://images.unsplash.com/photo-1662302392561-b1deecd3579d?crop=entropy&cs=srgb&fm=jpg&q=85";
const LISA_IMAGE: &str = "https://images.unsplash.com/photo-1755549476788-efd8bf819561?crop=entropy&cs=srgb&fm=jpg&q=85";
const SARAH_IMAGE: &str = "https://images.unsplash.com/photo-1638244398513-17b778d24efe?crop=entropy&cs=srgb&fm=jpg&q=85";
const STRETCH_IMAGE: &str = "https://images.unsplash.com/photo-1660171465646-23a749459e74?crop=entropy&cs=srgb&fm=jpg&q=85";
const YIN_IMAGE: &str = "https://images.pexels.com/photos/3823040/pexels-photo-3823040.jpeg";
const MEDITATION_IMAGE: &str = "https://images.unsplash.com/photo-1729886484969-188f0d7f196c?crop=entropy&cs=srgb&fm=jpg&q=85";

/// Demo catalog inserted into an empty store.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub trainers: Vec<Trainer>,
    pub sessions: Vec<Session>,
    pub programs: Vec<Program>,
}

fn trainer(id: &str, name: &str, bio: &str, image: &str, specialization: &str) -> Trainer {
    Trainer {
        id: id.into(),
        name: name.into(),
        bio: bio.into(),
        image: image.into(),
        specialization: specialization.into(),
    }
}

fn program(
    id: &str,
    title: &str,
    description: &str,
    image: &str,
    days: i32,
    category: &str,
) -> Program {
    Program {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        image: image.into(),
        duration_days: days,
        start_date: None,
        end_date: None,
        category: category.into(),
        sessions_count: days,
    }
}

pub fn demo() -> SeedData {
    let david = trainer(
        "trainer-1",
        "David John",
        "Mindfulness meditation expert with 10+ years of experience",
        DAVID_IMAGE,
        "Meditation",
    );
    let lisa = trainer(
        "trainer-2",
        "Lisa Mary",
        "Vinyasa flow yoga instructor passionate about holistic wellness",
        LISA_IMAGE,
        "Yoga",
    );
    let sarah = trainer(
        "trainer-3",
        "Sarah Chen",
        "Sleep meditation specialist helping people achieve better rest",
        SARAH_IMAGE,
        "Sleep",
    );

    let sessions = vec![
        Session {
            description: "A calming mindfulness meditation session to center your thoughts".into(),
            video_url: Some("https://example.com/meditation-video".into()),
            ..Session::by(&david, "session-1", "Mindfulness Meditation", "Meditation", 20)
        },
        Session {
            description: "Dynamic flowing yoga sequence to energize your body".into(),
            video_url: Some("https://example.com/yoga-video".into()),
            ..Session::by(&lisa, "session-2", "Vinyasa Flow Yoga", "Yoga", 45)
        },
        Session {
            description: "Guided sleep meditation for deep, restful sleep".into(),
            video_url: Some("https://example.com/sleep-video".into()),
            ..Session::by(&sarah, "session-3", "Deep Sleep Journey", "Sleep", 30)
        },
        Session {
            description: "Gentle morning yoga to wake up your body".into(),
            image: STRETCH_IMAGE.into(),
            video_url: Some("https://example.com/morning-yoga".into()),
            ..Session::by(&lisa, "session-4", "Morning Stretch Flow", "Yoga", 15)
        },
        Session {
            description: "Learn fundamental breathing techniques for relaxation".into(),
            video_url: Some("https://example.com/breathing".into()),
            ..Session::by(&david, "session-5", "Breathing Basics", "Meditation", 10)
        },
    ];

    let programs = vec![
        Program {
            start_date: Some("2026-04-09".into()),
            end_date: Some("2026-04-19".into()),
            ..program(
                "program-1",
                "10-Day Yoga Workshop",
                "Complete yoga foundation program for beginners",
                STRETCH_IMAGE,
                10,
                "Yoga",
            )
        },
        program(
            "program-2",
            "Relax with Yin Yoga",
            "Slow-paced, gentle yoga for deep relaxation",
            YIN_IMAGE,
            7,
            "Yoga",
        ),
        program(
            "program-3",
            "Vinyasa Flow Challenge",
            "21-day challenge to master dynamic flow sequences",
            STRETCH_IMAGE,
            21,
            "Yoga",
        ),
        program(
            "program-4",
            "Meditation Mastery",
            "14-day meditation intensive for inner peace",
            MEDITATION_IMAGE,
            14,
            "Meditation",
        ),
    ];

    SeedData {
        trainers: vec![david, lisa, sarah],
        sessions,
        programs,
    }
}
