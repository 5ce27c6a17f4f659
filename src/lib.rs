#![no_std]

multiversx_sc::imports!();

pub mod fund_me_proxy;
pub mod price_feed_proxy;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait FundMe {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// `minimum_usd` is denominated in USD with 18 decimals; the deployer
    /// becomes the owner.
    #[init]
    fn init(&self, price_feed_address: ManagedAddress, minimum_usd: BigUint) {
        self.owner().set(&self.blockchain().get_caller());
        self.price_feed_address().set(&price_feed_address);
        self.minimum_usd().set(&minimum_usd);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: fund
    // Anyone can pledge, provided the attached value converts
    // to at least the configured USD minimum.
    // ========================================================

    #[endpoint(fund)]
    #[payable("EGLD")]
    fn fund(&self) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();
        // A positive USD minimum already implies this; the guard keeps the
        // funder-list invariant intact under a zero-minimum deployment.
        require!(payment > 0u64, "Contribution must be positive");

        // Fresh oracle read on every call — the price moves between calls.
        let (price, decimals) = self.read_price_snapshot();

        // payment (18 decimals) * price / 10^decimals keeps the result in
        // 18-decimal USD. BigUint division truncates, so a contribution is
        // never rounded up past the minimum.
        let converted_usd = &payment * &price / BigUint::from(10u64).pow(decimals);
        require!(
            converted_usd >= self.minimum_usd().get(),
            "Contribution below minimum"
        );

        // First contribution since construction or the last withdrawal:
        // append to the funder list, keeping first-contribution order.
        if self.amount_funded(&caller).is_empty() {
            self.funders().push(&caller);
        }
        self.amount_funded(&caller).update(|funded| *funded += &payment);

        self.fund_event(&caller, &payment);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Owner drains the pooled balance and resets the ledger.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self) {
        let caller = self.blockchain().get_caller();
        self.require_owner(&caller);

        // Re-reads the funder list length from storage on every pass.
        let mut index = 1usize;
        while index <= self.funders().len() {
            let funder = self.funders().get(index);
            self.amount_funded(&funder).clear();
            index += 1;
        }

        self.clear_funders_and_disburse(&caller);
    }

    // ========================================================
    // ENDPOINT: cheaperWithdraw
    // Same external contract as withdraw; reads the funder list
    // out of storage once and iterates the local copy.
    // ========================================================

    #[endpoint(cheaperWithdraw)]
    fn cheaper_withdraw(&self) {
        let caller = self.blockchain().get_caller();
        self.require_owner(&caller);

        let funders: ManagedVec<ManagedAddress> = self.funders().iter().collect();
        for funder in &funders {
            self.amount_funded(&funder).clear();
        }

        self.clear_funders_and_disburse(&caller);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_owner(&self, caller: &ManagedAddress) {
        require!(caller == &self.owner().get(), "Caller is not the owner");
    }

    /// Reads `(price, decimals)` from the configured price feed. A failing
    /// or absent feed aborts the transaction with the cross-contract call
    /// error; no fallback price is substituted.
    fn read_price_snapshot(&self) -> (BigUint, u32) {
        let price_feed = self.price_feed_address().get();
        let snapshot: MultiValue2<BigUint, u32> = self
            .tx()
            .to(&price_feed)
            .typed(price_feed_proxy::PriceFeedProxy)
            .latest_price()
            .returns(ReturnsResult)
            .sync_call_readonly();
        snapshot.into_tuple()
    }

    /// Shared tail of both withdrawal endpoints: empty the funder list and
    /// send the whole pooled balance to the owner. A failed transfer aborts
    /// the transaction and reverts the ledger reset with it.
    fn clear_funders_and_disburse(&self, to: &ManagedAddress) {
        self.funders().clear();

        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        self.send().direct_egld(to, &balance);

        self.withdraw_event(to, &balance);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getPriceFeed)]
    fn get_price_feed(&self) -> ManagedAddress {
        self.price_feed_address().get()
    }

    #[view(getOwner)]
    fn get_owner(&self) -> ManagedAddress {
        self.owner().get()
    }

    #[view(getMinimumUsd)]
    fn get_minimum_usd(&self) -> BigUint {
        self.minimum_usd().get()
    }

    /// Cumulative amount pledged by `funder`; 0 for unknown identities.
    #[view(getAddressToAmountFunded)]
    fn get_address_to_amount_funded(&self, funder: &ManagedAddress) -> BigUint {
        self.amount_funded(funder).get()
    }

    /// Funder at zero-based `index` in first-contribution order.
    #[view(getFunder)]
    fn get_funder(&self, index: usize) -> ManagedAddress {
        require!(index < self.funders().len(), "Funder index out of range");
        self.funders().get(index + 1)
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("fund")]
    fn fund_event(&self, #[indexed] funder: &ManagedAddress, amount: &BigUint);

    #[event("withdraw")]
    fn withdraw_event(&self, #[indexed] owner: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("priceFeedAddress")]
    fn price_feed_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("minimumUsd")]
    fn minimum_usd(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Ledger state ──

    #[storage_mapper("amountFunded")]
    fn amount_funded(&self, funder: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("funders")]
    fn funders(&self) -> VecMapper<ManagedAddress>;
}
