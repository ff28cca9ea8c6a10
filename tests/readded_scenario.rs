// Bulk scenario: 800,000 distinct keys interleaved with a re-added key,
// followed by a contiguous range of deletes.
use chain_hashmap::HashTable;

const N: usize = 800_000;

#[test]
fn bulk_insert_readd_and_delete_range() {
    let mut t = HashTable::new().unwrap();
    for i in 0..N {
        t.put(&format!("{i}_key"), &format!("{i}_val")).unwrap();
        t.put("readded_key", "readded_val").unwrap();
    }
    assert_eq!(t.len(), N + 1);
    assert_eq!(t.capacity(), 1_779_761);

    for i in 1501..2001 {
        t.delete(&format!("{i}_key")).unwrap();
    }
    assert_eq!(t.len(), N + 1 - 500);

    for i in 1501..2001 {
        assert!(t.get(&format!("{i}_key")).is_none());
    }
    assert_eq!(t.get("1500_key"), Some("1500_val"));
    assert_eq!(t.get("2001_key"), Some("2001_val"));

    // The dump lists exactly the live records, with one readded_key row.
    let dump = t.dump().to_string();
    let rows: Vec<&str> = dump
        .lines()
        .filter(|l| l.starts_with('|') && !l.starts_with("| n_keys:"))
        .filter(|l| !l.starts_with("| Collisions:"))
        .collect();
    assert_eq!(rows.len(), N + 1 - 500);
    let readded: Vec<&&str> = rows
        .iter()
        .filter(|l| l.contains(" readded_key |"))
        .collect();
    assert_eq!(readded.len(), 1);
    assert!(readded[0].ends_with(&format!("{:>36}|", "readded_val")));
    assert!(dump.contains(&format!("| n_keys: {:>21} |", N + 1 - 500)));

    assert_eq!(t.destroy(), N + 1 - 500);
}
