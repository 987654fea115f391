//! Quote source boundary over DEX routers

pub mod router;

pub use router::*;

#[cfg(test)]
pub(crate) mod testkit {
    use alloy::primitives::{Address, U256};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::QuoteSource;
    use crate::errors::{BotError, BotResult};

    /// Programmable quote source for tests: returns the configured amounts
    /// for an exact `(amount_in, path)` pair, an error for pairs marked as
    /// failing, and counts every call it receives.
    pub(crate) struct MockQuoteSource {
        name: &'static str,
        quotes: Vec<(U256, Vec<Address>, Option<Vec<U256>>)>,
        calls: AtomicUsize,
    }

    impl MockQuoteSource {
        pub(crate) fn named(name: &'static str) -> Self {
            Self {
                name,
                quotes: Vec::new(),
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn with_quote(
            mut self,
            amount_in: U256,
            path: Vec<Address>,
            amounts: Vec<U256>,
        ) -> Self {
            self.quotes.push((amount_in, path, Some(amounts)));
            self
        }

        pub(crate) fn with_failure(mut self, amount_in: U256, path: Vec<Address>) -> Self {
            self.quotes.push((amount_in, path, None));
            self
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl QuoteSource for MockQuoteSource {
        fn name(&self) -> &str {
            self.name
        }

        async fn amounts_out(&self, amount_in: U256, path: &[Address]) -> BotResult<Vec<U256>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            for (amount, quote_path, response) in &self.quotes {
                if *amount == amount_in && quote_path.as_slice() == path {
                    return match response {
                        Some(amounts) => Ok(amounts.clone()),
                        None => Err(BotError::Quote {
                            router: self.name.to_string(),
                            message: "programmed failure".to_string(),
                        }),
                    };
                }
            }
            Err(BotError::Quote {
                router: self.name.to_string(),
                message: "no quote programmed for this path".to_string(),
            })
        }
    }
}
