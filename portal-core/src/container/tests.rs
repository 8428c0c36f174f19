use super::command::parse_container_names;
use super::*;
use crate::config::{AppConfig, TimeoutConfig};
use crate::registry::{ServiceDescriptor, StackDescriptor};
use crate::testing::{FakeRunner, docker_name_matches};
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn manager(runner: &Arc<FakeRunner>) -> DockerManager {
    DockerManager::new(runner.clone(), TimeoutConfig::default())
}

fn service(id: &str) -> ServiceDescriptor {
    ServiceDescriptor {
        id: id.to_string(),
        container_pattern: id.to_string(),
        working_directory: PathBuf::from("/work/vote"),
        compose_service: None,
        project_path: PathBuf::from("/work/vote"),
    }
}

fn stack(members: &[&str]) -> StackDescriptor {
    StackDescriptor {
        id: "feepay".to_string(),
        display_name: "Fee & Pay".to_string(),
        members: members.iter().map(|m| m.to_string()).collect(),
    }
}

const FEEPAY: &[&str] = &[
    "ccpay-bubble",
    "ccpay-payment-api",
    "ccpay-db",
    "s2s-mock",
    "rabbitmq",
];

#[test]
fn test_parse_container_names() {
    let names = parse_container_names("vote-api\n\n  vote-db  \n");
    assert_eq!(names, vec!["vote-api", "vote-db"]);
    assert!(parse_container_names("").is_empty());
}

#[test]
fn test_stack_status_flags() {
    let status = StackStatus::from_members(vec![
        MemberStatus {
            name: "a".to_string(),
            running: true,
        },
        MemberStatus {
            name: "b".to_string(),
            running: false,
        },
    ]);
    assert!(status.running);
    assert!(status.is_partial());
    assert!(!status.is_fully_running());

    let empty = StackStatus::from_members(Vec::new());
    assert!(!empty.running);
    assert!(!empty.is_fully_running());
}

#[tokio::test]
async fn test_service_status_follows_container_listing() {
    let runner = Arc::new(FakeRunner::with_running(&["vote-api"], &["vote-db"]));
    let docker = manager(&runner);

    assert!(docker.service_status(&service("vote-api")).await.unwrap().running);
    assert!(!docker.service_status(&service("vote-db")).await.unwrap().running);
    assert!(!docker.service_status(&service("vote-ui")).await.unwrap().running);

    let calls = runner.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(
        calls[0].args,
        vec!["ps", "--filter", "name=vote-api", "--format", "{{.Names}}"]
    );
}

#[tokio::test]
async fn test_service_status_query_failure_propagates() {
    let mut fake = FakeRunner::with_running(&[], &[]);
    fake.failing_queries.insert("vote-api".to_string());
    let runner = Arc::new(fake);

    let err = manager(&runner)
        .service_status(&service("vote-api"))
        .await
        .unwrap_err();
    assert!(err.stderr().unwrap().contains("Docker daemon"));
}

#[tokio::test]
async fn test_toggle_stopped_service_starts_it() {
    let runner = Arc::new(FakeRunner::with_running(&[], &["vote-api"]));
    let outcome = manager(&runner)
        .toggle_service(&service("vote-api"))
        .await
        .unwrap();

    assert!(outcome.success);
    assert!(outcome.running);
    assert_eq!(outcome.message, "Service started successfully");

    let compose = runner.calls_matching("docker-compose", "up");
    assert_eq!(compose.len(), 1);
    assert_eq!(compose[0].args, vec!["up", "-d", "vote-api"]);
    assert_eq!(compose[0].cwd.as_deref(), Some(Path::new("/work/vote")));
    assert!(runner.calls_matching("docker-compose", "stop").is_empty());

    // 只有动作前的一次状态查询
    assert_eq!(runner.calls_matching("docker", "ps").len(), 1);
    assert_eq!(runner.calls().len(), 2);
}

#[tokio::test]
async fn test_toggle_running_service_stops_it() {
    let runner = Arc::new(FakeRunner::with_running(&["vote-api"], &[]));
    let mut svc = service("vote-api");
    svc.compose_service = Some("api".to_string());

    let outcome = manager(&runner).toggle_service(&svc).await.unwrap();

    assert!(outcome.success);
    assert!(!outcome.running);
    assert_eq!(outcome.message, "Service stopped successfully");
    assert_eq!(outcome.output(), "Container api  Done");

    let compose = runner.calls_matching("docker-compose", "stop");
    assert_eq!(compose.len(), 1);
    assert_eq!(compose[0].args, vec!["stop", "api"]);
    assert!(runner.calls_matching("docker-compose", "up").is_empty());
    assert_eq!(runner.calls().len(), 2);
}

#[tokio::test]
async fn test_toggle_service_command_failure_is_error() {
    let mut fake = FakeRunner::with_running(&[], &[]);
    fake.failing_actions.insert("vote-api".to_string());
    let runner = Arc::new(fake);

    let err = manager(&runner)
        .toggle_service(&service("vote-api"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("docker-compose up -d vote-api"));
    assert!(err.stderr().is_some());
}

#[tokio::test]
async fn test_stack_status_counts_members() {
    let runner = Arc::new(FakeRunner::with_running(
        &["ccpay-db", "rabbitmq"],
        &["ccpay-bubble", "ccpay-payment-api", "s2s-mock"],
    ));
    let status = manager(&runner).stack_status(&stack(FEEPAY)).await;

    assert_eq!(status.total_count, 5);
    assert_eq!(status.running_count, 2);
    assert!(status.running);
    let names: Vec<_> = status.members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, FEEPAY);
    assert!(status.members[2].running);
    assert!(!status.members[0].running);
}

#[tokio::test]
async fn test_stack_status_continues_past_query_failures() {
    let mut fake = FakeRunner::with_running(&["ccpay-bubble", "ccpay-db", "rabbitmq"], &[]);
    fake.failing_queries.insert("ccpay-db".to_string());
    let runner = Arc::new(fake);

    let status = manager(&runner).stack_status(&stack(FEEPAY)).await;

    assert_eq!(runner.calls_matching("docker", "ps").len(), 5);
    assert_eq!(status.running_count, 2);
    assert!(!status.members[2].running);
    assert!(status.members[4].running);
}

#[tokio::test]
async fn test_stack_status_all_stopped() {
    let runner = Arc::new(FakeRunner::with_running(&[], FEEPAY));
    let status = manager(&runner).stack_status(&stack(FEEPAY)).await;
    assert_eq!(status.running_count, 0);
    assert!(!status.running);
}

#[tokio::test]
async fn test_partially_running_stack_is_fully_stopped() {
    let mut fake = FakeRunner::with_running(
        &["ccpay-bubble", "rabbitmq"],
        &["ccpay-payment-api", "ccpay-db", "s2s-mock"],
    );
    fake.failing_actions.insert("ccpay-db".to_string());
    let runner = Arc::new(fake);

    let outcome = manager(&runner).toggle_stack(&stack(FEEPAY)).await;

    assert!(outcome.success);
    assert!(!outcome.running);
    assert_eq!(outcome.message, "Stack stopped successfully");

    let stops: Vec<_> = runner
        .calls_matching("docker", "stop")
        .into_iter()
        .map(|c| c.args[1].clone())
        .collect();
    assert_eq!(stops, FEEPAY);
    assert!(runner.calls_matching("docker", "start").is_empty());

    assert_eq!(outcome.per_item_results.len(), 5);
    assert_eq!(outcome.per_item_results[0], "Stopped ccpay-bubble");
    assert!(outcome.per_item_results[2].starts_with("ccpay-db: "));
    assert!(outcome.per_item_results[2].contains("No such container"));
    assert_eq!(outcome.per_item_results[4], "Stopped rabbitmq");
}

#[tokio::test]
async fn test_stopped_stack_starts_existing_members_only() {
    let runner = Arc::new(FakeRunner::with_running(
        &[],
        &["ccpay-bubble", "ccpay-payment-api", "ccpay-db", "rabbitmq"],
    ));

    let outcome = manager(&runner).toggle_stack(&stack(FEEPAY)).await;

    assert!(outcome.success);
    assert!(outcome.running);
    assert_eq!(outcome.message, "Stack started successfully");
    assert_eq!(
        outcome.output(),
        [
            "Started ccpay-bubble",
            "Started ccpay-payment-api",
            "Started ccpay-db",
            "s2s-mock: Container does not exist",
            "Started rabbitmq",
        ]
        .join("\n")
    );

    let starts: Vec<_> = runner
        .calls_matching("docker", "start")
        .into_iter()
        .map(|c| c.args[1].clone())
        .collect();
    assert_eq!(
        starts,
        vec!["ccpay-bubble", "ccpay-payment-api", "ccpay-db", "rabbitmq"]
    );
    assert!(runner.calls_matching("docker", "stop").is_empty());
}

#[tokio::test]
async fn test_start_records_existence_check_failure() {
    let mut fake = FakeRunner::with_running(&[], &["ccpay-bubble"]);
    fake.failing_queries.insert("ccpay-db".to_string());
    let runner = Arc::new(fake);

    let outcome = manager(&runner)
        .toggle_stack(&stack(&["ccpay-bubble", "ccpay-db"]))
        .await;

    assert!(outcome.running);
    assert_eq!(outcome.per_item_results[0], "Started ccpay-bubble");
    assert!(outcome.per_item_results[1].starts_with("ccpay-db: Command failed"));
    assert_eq!(runner.calls_matching("docker", "start").len(), 1);
}

#[test]
fn test_fake_name_filter_matches_like_docker() {
    assert!(docker_name_matches("vote-ui", "vote-ui-vue"));
    assert!(docker_name_matches("^vote-ui", "vote-ui-vue"));
    assert!(!docker_name_matches("^vote-ui$", "vote-ui-vue"));
    assert!(docker_name_matches("^vote-ui$", "vote-ui"));
    assert!(docker_name_matches("ui-vue$", "vote-ui-vue"));
}

fn default_vote_stack() -> (ServiceDescriptor, StackDescriptor) {
    let config = AppConfig::default();
    let service = config
        .services
        .iter()
        .find(|s| s.id == "vote-ui")
        .cloned()
        .unwrap();
    let stack = config.stacks.iter().find(|s| s.id == "vote").cloned().unwrap();
    (service, stack)
}

#[tokio::test]
async fn test_stack_member_does_not_match_longer_container_names() {
    let (service, stack) = default_vote_stack();
    let runner = Arc::new(FakeRunner::with_running(&["vote-ui-vue"], &[]));
    let docker = manager(&runner);

    let status = docker.stack_status(&stack).await;
    assert_eq!(status.running_count, 1);
    assert!(!status.members[0].running);
    assert_eq!(status.members[1].name, "vote-ui-vue");
    assert!(status.members[1].running);

    // 服务接口和栈接口对同一个容器给出一致结果
    assert!(!docker.service_status(&service).await.unwrap().running);

    let queries = runner.calls_matching("docker", "ps");
    assert_eq!(queries[0].args[2], "name=^vote-ui$");
}

#[tokio::test]
async fn test_missing_member_with_similar_names_is_not_started() {
    let (_, stack) = default_vote_stack();
    let runner = Arc::new(FakeRunner::with_running(&[], &["vote-ui-vue"]));

    let outcome = manager(&runner).toggle_stack(&stack).await;

    assert!(outcome.running);
    assert_eq!(outcome.per_item_results[0], "vote-ui: Container does not exist");
    assert_eq!(outcome.per_item_results[1], "Started vote-ui-vue");

    let starts: Vec<_> = runner
        .calls_matching("docker", "start")
        .into_iter()
        .map(|c| c.args[1].clone())
        .collect();
    assert_eq!(starts, vec!["vote-ui-vue"]);
}
