//! End-to-end analysis and scaffolding over Java sources and class descriptors

use std::fs;
use std::path::Path;
use stubsmith::{
    BatchRunner, ClassOutcome, ClassSource, Classpath, Error, ServiceAnalyzer,
    TestScaffoldComposer,
};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn test_delete_user_is_a_mutator_with_failure_test() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "com/example/AccountService.java",
        r#"package com.example;

@Service
public class AccountService {
    public void deleteUser(Long id) {
    }
}
"#,
    );

    let classpath = Classpath::from_roots([temp.path()]);
    let info = ServiceAnalyzer::new(&classpath)
        .analyze("com.example.AccountService")
        .unwrap();

    assert_eq!(info.test_methods.len(), 1);
    let method = &info.test_methods[0];
    assert_eq!(method.function_name, "deleteUser");
    assert!(method.is_mutator);
    assert!(!method.is_transactional);

    let text = TestScaffoldComposer::new().compose(&info);
    assert!(text.contains("fun should_throw_exception_when_deleteUser_fails()"));
    assert!(text.contains("assertThrows<Exception> {"));
    assert!(text.contains("val id: Long = 1L"));
}

#[test]
fn test_fetch_method_gets_no_failure_test() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "com/example/ReportService.java",
        r#"package com.example;

@Service
public class ReportService {
    public String fetchFoo(String key) {
        return key;
    }
}
"#,
    );

    let classpath = Classpath::from_roots([temp.path()]);
    let info = ServiceAnalyzer::new(&classpath)
        .analyze("com.example.ReportService")
        .unwrap();

    let method = &info.test_methods[0];
    assert!(!method.is_mutator);
    assert!(!method.is_transactional);

    let text = TestScaffoldComposer::new().compose(&info);
    assert!(text.contains("val key: String = \"test-value-key\""));
    assert!(!text.contains("should_throw_exception_when_fetchFoo_fails"));
}

#[test]
fn test_zero_dependency_service_constructs_without_arguments() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "com/example/ClockService.java",
        r#"package com.example;

@Service
public class ClockService {
    public long now() {
        return 0L;
    }
}
"#,
    );

    let classpath = Classpath::from_roots([temp.path()]);
    let info = ServiceAnalyzer::new(&classpath)
        .analyze("com.example.ClockService")
        .unwrap();
    assert!(info.mock_dependencies.is_empty());

    let text = TestScaffoldComposer::new().compose(&info);
    assert!(text.contains("clockService = ClockService()"));
}

#[test]
fn test_descriptor_root_is_used_for_dependencies() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "descriptors/com/example/OrderService.class.json",
        r#"{
            "qualified_name": "com.example.OrderService",
            "kind": "class",
            "annotations": ["org.springframework.stereotype.Service"],
            "constructors": [
                { "parameters": [{ "name": "orderRepository", "type": "com.example.OrderRepository" }] }
            ],
            "methods": [
                {
                    "name": "updateOrder",
                    "parameters": [{ "name": "id", "type": "Long" }],
                    "return_type": "Boolean",
                    "annotations": ["Transactional"]
                }
            ]
        }"#,
    );
    write(
        temp.path(),
        "descriptors/com/example/OrderRepository.class.json",
        r#"{ "qualified_name": "com.example.OrderRepository", "kind": "interface" }"#,
    );

    let classpath = Classpath::from_roots([temp.path().join("descriptors")]);
    let info = ServiceAnalyzer::new(&classpath)
        .analyze("com.example.OrderService")
        .unwrap();

    assert_eq!(info.mock_dependencies.len(), 1);
    assert!(info.mock_dependencies[0].relaxed);
    assert!(info.test_methods[0].is_transactional);

    let text = TestScaffoldComposer::new().compose(&info);
    assert!(text.contains("orderRepository = mockk<OrderRepository>(relaxed = true)"));
    assert!(text.contains("orderService = OrderService(orderRepository!!)"));
}

#[test]
fn test_error_taxonomy() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "com/example/Helper.java",
        "package com.example;\n\npublic class Helper {}\n",
    );

    let classpath = Classpath::from_roots([temp.path()]);
    assert!(classpath.load("com.example.Helper").unwrap().is_some());

    let analyzer = ServiceAnalyzer::new(&classpath);
    assert!(matches!(
        analyzer.analyze("com.example.Nowhere"),
        Err(Error::ClassNotFound { .. })
    ));
    assert!(matches!(
        analyzer.analyze("com.example.Helper"),
        Err(Error::MissingRequiredMarker { .. })
    ));
}

#[test]
fn test_batch_writes_only_successful_classes() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "src/com/example/PingService.java",
        "package com.example;\n\n@Service\npublic class PingService {\n    public boolean ping() { return true; }\n}\n",
    );

    let classpath = Classpath::from_roots([temp.path().join("src")]);
    let out = temp.path().join("out");
    let report = BatchRunner::new(ServiceAnalyzer::new(&classpath), &out)
        .run(&["com.example.Unknown", "com.example.PingService"]);

    assert_eq!(report.failed(), 1);
    assert!(matches!(report.classes[1].outcome, ClassOutcome::Written { .. }));

    let written = fs::read_to_string(out.join("com/example/PingServiceTest.kt")).unwrap();
    assert!(written.contains("assertTrue(result, \"result should be true\")"));
    assert!(!out.join("com/example/UnknownTest.kt").exists());
}
