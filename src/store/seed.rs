use crate::models::activity::{Activity, Catalog};

/// Initial catalog loaded at process start.
pub fn initial_catalog() -> Catalog {
    [
        (
            "Debate Team",
            Activity::new(
                "Develop public speaking and argumentation skills through competitive debate",
                "Wednesdays, 4:00 PM - 5:30 PM",
                16,
                &["alex@mergington.edu"],
            ),
        ),
        (
            "Robotics Club",
            Activity::new(
                "Design, build, and program robots for competitions",
                "Mondays and Thursdays, 4:00 PM - 5:30 PM",
                18,
                &["james@mergington.edu", "lucy@mergington.edu"],
            ),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Competitive basketball team with practices and games",
                "Tuesdays, Wednesdays, Fridays, 3:30 PM - 5:00 PM",
                15,
                &["marcus@mergington.edu"],
            ),
        ),
        (
            "Tennis Club",
            Activity::new(
                "Tennis skills development and friendly matches",
                "Mondays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["sarah@mergington.edu", "tyler@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            Activity::new(
                "Act in school plays and theatrical productions",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                25,
                &["natasha@mergington.edu", "ryan@mergington.edu"],
            ),
        ),
        (
            "Art Studio",
            Activity::new(
                "Painting, drawing, and mixed media art creation",
                "Wednesdays and Saturdays, 2:00 PM - 4:00 PM",
                15,
                &["isabella@mergington.edu"],
            ),
        ),
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
    ]
    .into_iter()
    .map(|(name, activity)| (name.to_string(), activity))
    .collect()
}
