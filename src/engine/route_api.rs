use super::Engine;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    api::RouteAPI,
    auth::User,
    entities::{Coordinates, RouteSummary},
    error::Error,
};

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn preview_route(
        &self,
        user: User,
        waypoints: Vec<Coordinates>,
        departure_time: Option<DateTime<Utc>>,
    ) -> Result<RouteSummary, Error> {
        self.routing.multi_stop_route(waypoints, departure_time).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::RouteAPI;
    use crate::auth::User;
    use crate::cache::MemoryQuoteCache;
    use crate::engine::Engine;
    use crate::mocks::{self, MockLedger, MockPricingConfigs, MockRouting};

    fn engine(routing: MockRouting) -> Engine {
        Engine::new(
            Box::new(routing),
            Box::new(MockPricingConfigs::none()),
            Box::new(MemoryQuoteCache::new()),
            Box::new(MockLedger::new()),
        )
    }

    #[tokio::test]
    async fn preview_returns_the_provider_summary() {
        let routing = MockRouting::returning(mocks::route_summary());
        let engine = engine(routing.clone());

        let summary = engine
            .preview_route(
                User::new_system_user(),
                vec![mocks::pickup(), mocks::dropoff(), mocks::pickup()],
                None,
            )
            .await
            .unwrap();

        assert_eq!(summary, mocks::route_summary());
        assert_eq!(routing.calls(), 1);
    }

    #[tokio::test]
    async fn single_waypoint_preview_is_rejected_before_any_request() {
        let routing = MockRouting::returning(mocks::route_summary());
        let engine = engine(routing.clone());

        let err = engine
            .preview_route(User::new_system_user(), vec![mocks::pickup()], None)
            .await
            .unwrap_err();

        assert_eq!(err.code, 101);
        assert_eq!(routing.calls(), 0);
    }
}
