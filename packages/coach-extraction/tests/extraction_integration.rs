//! Integration tests for the page-to-store workflow:
//! 1. Plan navigation from a homepage
//! 2. Fetch and extract coach candidates
//! 3. Persist with validation and dedup

use coach_extraction::{
    extract_coaches, homepage_guesses, persist_candidates, plan_navigation,
    testing::{fixtures, MockFetcher},
    ContactStore, ExtractionConfig, Level, MemoryStore, NavigationPlan, OrganizationContext,
    PageFetcher, RoleCategory, RunDeduplicator, SourceMethod, Sport, StaffPage, SubLevel,
};

fn college() -> OrganizationContext {
    OrganizationContext::new("North State University", Level::College, "MN")
        .with_id(11)
        .with_division("D2")
}

#[test]
fn test_head_baseball_coach_scenario() {
    let page = StaffPage::parse("https://abccollege.edu/staff", fixtures::SIMPLE_STAFF_CARD);
    let org = OrganizationContext::new("ABC College", Level::College, "OH").with_id(1);

    let coaches = extract_coaches(&page, &org, &ExtractionConfig::default());

    assert_eq!(coaches.len(), 1);
    let coach = &coaches[0];
    assert_eq!(coach.email, "coach@abccollege.edu");
    assert_eq!(coach.first_name.as_deref(), Some("John"));
    assert_eq!(coach.last_name.as_deref(), Some("Doe"));
    assert_eq!(coach.role_category, Some(RoleCategory::HeadCoach));
    assert_eq!(coach.sport_normalized, Some(Sport::Baseball));
    assert_eq!(coach.confidence_score, 0.95);
}

#[test]
fn test_college_directory() {
    let page = StaffPage::parse(
        "https://athletics.northstate.edu/staff-directory",
        fixtures::COLLEGE_DIRECTORY,
    );

    let coaches = extract_coaches(&page, &college(), &ExtractionConfig::default());
    let emails: Vec<_> = coaches.iter().map(|c| c.email.as_str()).collect();
    assert_eq!(
        emails,
        vec![
            "priley@northstate.edu",
            "jsmith@northstate.edu",
            "lgomez@northstate.edu",
            "sid@northstate.edu",
            "gear@northstate.edu",
        ]
    );

    assert_eq!(coaches[0].role_category, Some(RoleCategory::AthleticDirector));
    assert_eq!(coaches[0].sport_normalized, None);

    assert_eq!(coaches[1].first_name.as_deref(), Some("Jane"));
    assert_eq!(coaches[1].last_name.as_deref(), Some("Smith"));
    assert_eq!(coaches[1].role_category, Some(RoleCategory::HeadCoach));
    assert_eq!(coaches[1].sport_normalized, Some(Sport::WomensSoccer));

    assert_eq!(coaches[2].role_category, Some(RoleCategory::AssistantCoach));
    assert_eq!(coaches[2].sport_normalized, Some(Sport::TrackAndField));

    assert_eq!(coaches[3].confidence_score, SourceMethod::Regex.confidence());
    assert_eq!(coaches[3].full_name, None);
    assert_eq!(coaches[4].confidence_score, SourceMethod::Obfuscated.confidence());

    assert!(coaches.iter().all(|c| c.organization_id == Some(11) && c.state == "MN"));
}

#[test]
fn test_extraction_is_idempotent() {
    let page = StaffPage::parse("https://athletics.northstate.edu/staff", fixtures::COLLEGE_DIRECTORY);
    let config = ExtractionConfig::default();

    let first = extract_coaches(&page, &college(), &config);
    let second = extract_coaches(&page, &college(), &config);
    assert_eq!(first, second);

    let reparsed = StaffPage::parse("https://athletics.northstate.edu/staff", fixtures::COLLEGE_DIRECTORY);
    assert_eq!(first, extract_coaches(&reparsed, &college(), &config));
}

#[test]
fn test_n_mailto_links_yield_n_candidates() {
    let links: String = (0..7)
        .map(|i| format!(r#"<li><a href="mailto:coach{}@league.org">Coach {}</a></li>"#, i, i))
        .collect();
    let html = format!("<html><body><ul>{}</ul></body></html>", links);
    let page = StaffPage::parse("https://league.org/coaches", html);
    let org = OrganizationContext::new("River League", Level::Youth, "WI")
        .with_sub_level(SubLevel::RecLeague);

    let coaches = extract_coaches(&page, &org, &ExtractionConfig::default());
    assert_eq!(coaches.len(), 7);
    assert!(coaches.iter().all(|c| c.confidence_score == 0.95));
}

#[tokio::test]
async fn test_homepage_to_store() {
    let fetcher = MockFetcher::new()
        .with_page("https://northlittleleague.org", fixtures::LEAGUE_HOMEPAGE)
        .with_page(
            "https://northlittleleague.org/board-of-directors",
            r#"<html><body>
                <div class="board-member"><h4>Kim Novak</h4><p class="position">League President</p>
                  <a href="mailto:president@northlittleleague.org">Email</a></div>
                <div class="board-member"><h4>Ray Olsen</h4><p class="position">Treasurer</p>
                  <a href="mailto:treasurer@northlittleleague.org">Email</a></div>
                <div class="board-member"><h4>Kim Novak</h4><p class="position">Safety Officer</p>
                  <a href="mailto:President@NorthLittleLeague.org">Email</a></div>
            </body></html>"#,
        );
    let org = OrganizationContext::new("North Little League", Level::Youth, "MN")
        .with_id(3)
        .with_sub_level(SubLevel::LittleLeague);
    let config = ExtractionConfig::default();

    let home = fetcher.fetch("https://northlittleleague.org").await.unwrap();
    let plan = plan_navigation(&StaffPage::from_fetched(&home), org.level, &config);
    assert_eq!(
        plan,
        NavigationPlan::DirectoryLink {
            url: "https://northlittleleague.org/board-of-directors".to_string(),
            score: 1.0,
        }
    );

    let store = MemoryStore::new();
    let mut dedup = RunDeduplicator::new();
    for url in plan.urls() {
        let fetched = fetcher.fetch(&url).await.unwrap();
        let coaches = extract_coaches(&StaffPage::from_fetched(&fetched), &org, &config);
        assert_eq!(coaches.len(), 2);

        let stats = persist_candidates(&store, coaches, &mut dedup, &config).await;
        assert_eq!(stats.inserted, 2);
    }

    assert_eq!(store.count_coaches().await.unwrap(), 2);
    let records = store.all_coaches().await;
    assert_eq!(records[0].coach.email, "president@northlittleleague.org");
    assert_eq!(records[0].coach.role_category, Some(RoleCategory::LeagueOfficer));
    assert_eq!(records[1].coach.role_category, Some(RoleCategory::BoardMember));
}

#[tokio::test]
async fn test_high_school_homepage_extracted_in_place() {
    let org = OrganizationContext::new("Allen High School", Level::HighSchool, "TX")
        .with_id(21)
        .with_sub_level(SubLevel::HighSchool);
    let guesses = homepage_guesses(&org);
    let fetcher = MockFetcher::new().with_page("https://www.allenhs.org", fixtures::HIGH_SCHOOL_HOMEPAGE);
    let config = ExtractionConfig::default();

    let home = fetcher.fetch_first(&guesses).await.unwrap();
    assert_eq!(home.url, "https://www.allenhs.org");

    let page = StaffPage::from_fetched(&home);
    let plan = plan_navigation(&page, org.level, &config);
    assert!(matches!(plan, NavigationPlan::ExtractHere { .. }));
    assert!(plan.urls().is_empty());

    let coaches = extract_coaches(&page, &org, &config);
    assert_eq!(coaches.len(), 5);
    assert_eq!(coaches[0].full_name.as_deref(), Some("Terry Brown"));
    assert_eq!(coaches[0].role_category, Some(RoleCategory::HeadCoach));
    assert_eq!(coaches[0].sport_normalized, Some(Sport::Football));
    assert_eq!(coaches[4].role_category, Some(RoleCategory::Coach));
}
