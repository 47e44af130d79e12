use crate::models::{
    activity::Activity,
    itinerary::{Preferences, ScoredActivity},
};

const PREFERRED_CATEGORY_BONUS: f64 = 2.0;

/// Keep activities in the preferred categories (all of them when none are given)
/// and rank them by popularity plus the category bonus. Ties keep catalog order.
pub fn filter_and_score(activities: &[Activity], preferences: &Preferences) -> Vec<ScoredActivity> {
    let filter_by_category = !preferences.categories.is_empty();

    let mut scored: Vec<ScoredActivity> = activities
        .iter()
        .filter(|a| !filter_by_category || preferences.prefers(&a.category))
        .map(|activity| {
            let mut preference_score = activity.popularity;
            if preferences.prefers(&activity.category) {
                preference_score += PREFERRED_CATEGORY_BONUS;
            }
            ScoredActivity {
                activity: activity.clone(),
                preference_score,
            }
        })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.preference_score.total_cmp(&a.preference_score));
    scored
}
