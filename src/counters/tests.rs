// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Unit tests for counter lifecycle rules

#[cfg(test)]
mod test {
    use crate::counters::{Counter, CounterError, CounterRegistry};

    #[tokio::test]
    async fn test_unknown_name_is_not_found() {
        let registry = CounterRegistry::new();

        assert_eq!(
            registry.get("ghost").await,
            Err(CounterError::NotFound("ghost".to_string()))
        );
        assert_eq!(
            registry.increment("ghost").await,
            Err(CounterError::NotFound("ghost".to_string()))
        );
        assert_eq!(
            registry.delete("ghost").await,
            Err(CounterError::NotFound("ghost".to_string()))
        );
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_starts_at_zero() {
        let registry = CounterRegistry::new();

        let created = registry.create("foo").await.unwrap();
        assert_eq!(
            created,
            Counter {
                name: "foo".to_string(),
                value: 0
            }
        );
        assert_eq!(registry.get("foo").await.unwrap().value, 0);
    }

    #[tokio::test]
    async fn test_duplicate_create_keeps_value() {
        let registry = CounterRegistry::new();
        registry.create("bar").await.unwrap();
        registry.increment("bar").await.unwrap();

        let err = registry.create("bar").await.unwrap_err();
        assert_eq!(err, CounterError::AlreadyExists("bar".to_string()));
        assert_eq!(registry.get("bar").await.unwrap().value, 1);
    }

    #[tokio::test]
    async fn test_increment_k_times() {
        let registry = CounterRegistry::new();
        registry.create("baz").await.unwrap();

        for expected in 1..=5 {
            let counter = registry.increment("baz").await.unwrap();
            assert_eq!(counter.value, expected);
        }
        assert_eq!(registry.get("baz").await.unwrap().value, 5);
    }

    #[tokio::test]
    async fn test_delete_removes_counter() {
        let registry = CounterRegistry::new();
        registry.create("deleteThisCounter").await.unwrap();
        registry.increment("deleteThisCounter").await.unwrap();

        assert_eq!(registry.delete("deleteThisCounter").await, Ok(1));
        assert!(matches!(
            registry.get("deleteThisCounter").await,
            Err(CounterError::NotFound(_))
        ));
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_recreate_after_delete_resets_value() {
        let registry = CounterRegistry::new();
        registry.create("again").await.unwrap();
        registry.increment("again").await.unwrap();
        registry.delete("again").await.unwrap();

        assert_eq!(registry.create("again").await.unwrap().value, 0);
    }

    #[tokio::test]
    async fn test_names_are_case_sensitive() {
        let registry = CounterRegistry::new();
        registry.create("Foo").await.unwrap();

        assert!(registry.create("foo").await.is_ok());
        registry.increment("Foo").await.unwrap();

        assert_eq!(registry.get("Foo").await.unwrap().value, 1);
        assert_eq!(registry.get("foo").await.unwrap().value, 0);
        assert_eq!(registry.len().await, 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_single_winner() {
        let registry = CounterRegistry::new();

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let registry = registry.clone();
                tokio::spawn(async move { registry.create("race").await })
            })
            .collect();

        let mut created = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(CounterError::AlreadyExists(_)) => conflicts += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        assert_eq!(created, 1);
        assert_eq!(conflicts, 31);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_increments_are_not_lost() {
        let registry = CounterRegistry::new();
        registry.create("hits").await.unwrap();

        let handles: Vec<_> = (0..100)
            .map(|_| {
                let registry = registry.clone();
                tokio::spawn(async move { registry.increment("hits").await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(registry.get("hits").await.unwrap().value, 100);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CounterError::AlreadyExists("bar".to_string()).to_string(),
            "Counter bar already exists"
        );
        assert_eq!(
            CounterError::NotFound("baz".to_string()).to_string(),
            "Counter baz doesn't exist"
        );
        assert_eq!(CounterError::NotFound("baz".to_string()).name(), "baz");
    }

    #[test]
    fn test_counter_serializes_keyed_by_name() {
        let counter = Counter {
            name: "foo".to_string(),
            value: 7,
        };
        let json = serde_json::to_string(&counter).unwrap();
        assert_eq!(json, r#"{"foo":7}"#);
    }
}
