use levy_ledger::{GenesisConfig, LedgerEngine, LedgerError};
use levy_nullables::NullStore;
use levy_types::{Address, FeeRate, NetworkId};

fn test_address(n: u8) -> Address {
    Address::new(format!("levy_{:0>60}", n))
}

/// A ledger with policy config, moved balances, and live allowances.
fn populated_ledger() -> (LedgerEngine, Address) {
    let deployer = test_address(1);
    let mut ledger = levy_ledger::genesis::create_ledger(&GenesisConfig {
        network: NetworkId::Dev,
        deployer: deployer.clone(),
    });

    let holder = test_address(2);
    let counterparty = test_address(3);
    let vault = test_address(7);

    ledger.set_fee_accumulator(&deployer, vault).unwrap();
    ledger
        .set_fee_rate(&deployer, holder.clone(), FeeRate::new(250, 100))
        .unwrap();
    ledger
        .set_fee_exempt(&deployer, counterparty.clone(), true)
        .unwrap();

    ledger.transfer(&deployer, &holder, 500_000).unwrap();
    ledger.transfer(&holder, &counterparty, 120_000).unwrap();
    ledger.approve(&holder, &counterparty, 44_000);

    (ledger, deployer)
}

#[test]
fn save_then_load_reproduces_the_ledger() {
    let (ledger, _) = populated_ledger();
    let store = NullStore::new();

    ledger.save_to_store(&store).unwrap();
    let restored = LedgerEngine::load_from_store(&store).unwrap();

    assert_eq!(restored.total_supply(), ledger.total_supply());
    assert_eq!(restored.controller(), ledger.controller());
    assert_eq!(restored.fee_accumulator(), ledger.fee_accumulator());

    for (address, balance) in ledger.iter_balances() {
        assert_eq!(restored.balance_of(address), balance);
    }
    let holder = test_address(2);
    let counterparty = test_address(3);
    assert_eq!(restored.allowance(&holder, &counterparty), 44_000);
    assert_eq!(restored.fee_rate(&holder), FeeRate::new(250, 100));
    assert!(restored.is_fee_exempt(&counterparty));
}

#[test]
fn restored_ledger_keeps_taxing() {
    let (ledger, _) = populated_ledger();
    let store = NullStore::new();
    ledger.save_to_store(&store).unwrap();
    let mut restored = LedgerEngine::load_from_store(&store).unwrap();

    let holder = test_address(2);
    let other = test_address(9);
    let vault = test_address(7);
    let vault_before = restored.balance_of(&vault);

    // holder outbound 250 bp, `other` has no inbound rate: 2.5% of 40_000.
    let outcome = restored.transfer(&holder, &other, 40_000).unwrap();
    assert_eq!(outcome.fee_applied, 1_000);
    assert_eq!(restored.balance_of(&vault), vault_before + 1_000);
}

#[test]
fn load_from_empty_store_fails() {
    let store = NullStore::new();
    let result = LedgerEngine::load_from_store(&store);
    assert!(matches!(result.unwrap_err(), LedgerError::Storage(_)));
}

#[test]
fn load_rejects_balances_that_do_not_sum_to_supply() {
    use levy_store::BalanceStore;

    let (ledger, _) = populated_ledger();
    let store = NullStore::new();
    ledger.save_to_store(&store).unwrap();

    // Corrupt one balance.
    let holder = test_address(2);
    let balance = store.get_balance(&holder).unwrap().unwrap();
    store.put_balance(&holder, balance + 1).unwrap();

    let result = LedgerEngine::load_from_store(&store);
    assert!(matches!(result.unwrap_err(), LedgerError::Storage(_)));
}
