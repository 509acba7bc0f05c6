//! Test helpers reducing controller test boilerplate

use controller::{AuthApi, GenerationApi, MockAuthApi, MockStoryApi, StoryApi, WorkflowController};
use shared::{Credential, StorySummary};

use super::fixtures::TestFixtures;

/// Mocks for a successful login whose triggered refresh returns `catalog`.
///
/// Returned mocks are open for further expectations before building the
/// controller.
pub fn login_mocks(catalog: Vec<StorySummary>) -> (MockAuthApi, MockStoryApi) {
    let mut auth = MockAuthApi::new();
    auth.expect_login()
        .returning(|_, _| Ok(Credential::new(TestFixtures::TOKEN)));

    let mut story = MockStoryApi::new();
    story
        .expect_list_stories()
        .times(1)
        .returning(move |_| Ok(catalog.clone()));

    (auth, story)
}

/// Log in with the standard test credentials
pub async fn login<A, S, G>(controller: &WorkflowController<A, S, G>)
where
    A: AuthApi,
    S: StoryApi,
    G: GenerationApi,
{
    controller
        .login(TestFixtures::USERNAME, TestFixtures::PASSWORD)
        .await
        .expect("login should succeed");
}

/// Fill the authoring fields with the standard generation inputs
pub async fn author_inputs<A, S, G>(controller: &WorkflowController<A, S, G>)
where
    A: AuthApi,
    S: StoryApi,
    G: GenerationApi,
{
    controller.set_name(0, "Mira").await.expect("roster has a first entry");
    controller.set_scene(TestFixtures::SCENE).await;
    controller.set_scenario(TestFixtures::SCENARIO).await;
}
