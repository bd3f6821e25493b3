use super::*;

qc!(iter_matches_into_iter, _iter_matches_into_iter);
fn _iter_matches_into_iter(trie: Ipv4Trie) -> bool {
    trie.iter().eq(trie.clone())
}

qc!(first_last, _first_last);
fn _first_last(list: Vec<Operation>) -> bool {
    let (trie, model) = apply(&list);
    trie.first() == model.iter().next().copied() && trie.last() == model.iter().next_back().copied()
}

qc!(format_roundtrip, _format_roundtrip);
fn _format_roundtrip(trie: Ipv4Trie) -> bool {
    let text = trie.iter().map(addr::format).collect::<Vec<_>>();
    text.iter().map(|s| addr::parse(s)).collect::<Result<Ipv4Trie, _>>() == Ok(trie)
}
