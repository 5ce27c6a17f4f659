#![no_std]

multiversx_sc::imports!();

pub mod price_feed_mock_proxy;

/// Settable price feed used in place of a live oracle on development
/// networks and in scenario tests.
#[multiversx_sc::contract]
pub trait PriceFeedMock {
    #[init]
    fn init(&self, initial_price: BigUint, decimals: u32) {
        self.price().set(&initial_price);
        self.decimals().set(decimals);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(updatePrice)]
    fn update_price(&self, new_price: BigUint) {
        self.price().set(&new_price);
    }

    #[view(latestPrice)]
    fn latest_price(&self) -> MultiValue2<BigUint, u32> {
        (self.price().get(), self.decimals().get()).into()
    }

    #[storage_mapper("price")]
    fn price(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("decimals")]
    fn decimals(&self) -> SingleValueMapper<u32>;
}
