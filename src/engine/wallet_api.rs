use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::WalletAPI,
    auth::User,
    entities::{BalanceSummary, EntryStatus, LedgerEntry},
    error::{invalid_input_error, Error},
};

#[async_trait]
impl WalletAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn find_balance(&self, user: User, wallet_id: Uuid) -> Result<BalanceSummary, Error> {
        let entries = self.ledger.entries(wallet_id).await?;

        let mut available = 0.0;
        let mut pending = 0.0;

        for entry in &entries {
            match entry.status {
                EntryStatus::Settled => available += entry.amount,
                EntryStatus::Held => pending += entry.amount,
            }
        }

        Ok(BalanceSummary {
            available,
            pending,
            total: available + pending,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn record_entry(
        &self,
        user: User,
        wallet_id: Uuid,
        amount: f64,
        status: EntryStatus,
    ) -> Result<LedgerEntry, Error> {
        if amount <= 0.0 {
            return Err(invalid_input_error());
        }

        let entry = LedgerEntry::new(wallet_id, amount, status);

        self.ledger.append(&entry).await?;

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::api::WalletAPI;
    use crate::auth::User;
    use crate::cache::MemoryQuoteCache;
    use crate::engine::Engine;
    use crate::entities::{EntryStatus, LedgerEntry};
    use crate::mocks::{MockLedger, MockPricingConfigs, MockRouting};

    fn engine(ledger: MockLedger) -> Engine {
        Engine::new(
            Box::new(MockRouting::failing()),
            Box::new(MockPricingConfigs::none()),
            Box::new(MemoryQuoteCache::new()),
            Box::new(ledger),
        )
    }

    #[tokio::test]
    async fn empty_wallet_balances_are_zero() {
        let engine = engine(MockLedger::new());

        let balance = engine
            .find_balance(User::new_system_user(), Uuid::new_v4())
            .await
            .unwrap();

        assert_eq!(balance.available, 0.0);
        assert_eq!(balance.pending, 0.0);
        assert_eq!(balance.total, 0.0);
    }

    #[tokio::test]
    async fn settled_and_held_entries_split_into_available_and_pending() {
        let wallet_id = Uuid::new_v4();
        let other_wallet = Uuid::new_v4();
        let engine = engine(MockLedger::with_entries(vec![
            LedgerEntry::new(wallet_id, 10.0, EntryStatus::Settled),
            LedgerEntry::new(wallet_id, 4.0, EntryStatus::Held),
            LedgerEntry::new(wallet_id, 6.0, EntryStatus::Settled),
            LedgerEntry::new(other_wallet, 100.0, EntryStatus::Settled),
        ]));

        let balance = engine
            .find_balance(User::new_system_user(), wallet_id)
            .await
            .unwrap();

        assert_eq!(balance.available, 16.0);
        assert_eq!(balance.pending, 4.0);
        assert_eq!(balance.total, 20.0);
    }

    #[tokio::test]
    async fn non_positive_amounts_are_rejected() {
        let ledger = MockLedger::new();
        let engine = engine(ledger.clone());
        let user = User::new_system_user();
        let wallet_id = Uuid::new_v4();

        for amount in [0.0, -5.0] {
            let err = engine
                .record_entry(user.clone(), wallet_id, amount, EntryStatus::Settled)
                .await
                .unwrap_err();

            assert_eq!(err.code, 101);
        }

        assert_eq!(ledger.len(), 0);
    }

    #[tokio::test]
    async fn recorded_entry_shows_up_in_the_balance() {
        let engine = engine(MockLedger::new());
        let user = User::new_system_user();
        let wallet_id = Uuid::new_v4();

        engine
            .record_entry(user.clone(), wallet_id, 12.5, EntryStatus::Held)
            .await
            .unwrap();

        let balance = engine.find_balance(user, wallet_id).await.unwrap();

        assert_eq!(balance.pending, 12.5);
        assert_eq!(balance.total, 12.5);
    }
}
