use lin_pid::{
    INVALID_PID, MAX_ID, REFERENCE_PID_TABLE, compute_pid, frame_id, is_valid_pid, parse,
    reference_table,
};

#[test]
fn computed_pids_match_reference_table() {
    for id in 0..=MAX_ID {
        assert_eq!(
            compute_pid(id),
            REFERENCE_PID_TABLE[id as usize],
            "id {id:#04X}"
        );
    }
}

#[test]
fn out_of_range_ids_give_sentinel() {
    for id in (MAX_ID + 1)..=u8::MAX {
        let pid = compute_pid(id);
        assert_eq!(pid, INVALID_PID, "id {id:#04X}");
        assert!(!REFERENCE_PID_TABLE.contains(&pid));
    }
}

#[test]
fn exactly_sixty_four_valid_pids() {
    let valid: Vec<u8> = (0..=u8::MAX).filter(|&pid| is_valid_pid(pid)).collect();
    assert_eq!(valid.len(), 64);

    let mut sorted = REFERENCE_PID_TABLE.to_vec();
    sorted.sort_unstable();
    assert_eq!(valid, sorted);
}

#[test]
fn frame_id_inverts_compute_pid() {
    for id in 0..=MAX_ID {
        assert_eq!(frame_id(compute_pid(id)), Some(id));
    }
    // Flipping either parity bit invalidates the PID
    for id in 0..=MAX_ID {
        assert_eq!(frame_id(compute_pid(id) ^ 0x40), None);
        assert_eq!(frame_id(compute_pid(id) ^ 0x80), None);
    }
}

#[test]
fn reference_table_entries() {
    let entries: Vec<_> = reference_table().collect();
    assert_eq!(entries.len(), 64);
    assert_eq!(entries[0x27].id, 0x27);
    assert_eq!(entries[0x27].pid, 0xE7);
    assert!(entries.iter().all(|e| compute_pid(e.id) == e.pid));
}

#[test]
fn textual_forms_give_same_pid() {
    let pids: Vec<u8> = ["0x27", "27", "27h", "x27", "39d"]
        .iter()
        .map(|t| compute_pid(parse(t, false, false).unwrap()))
        .collect();
    assert!(pids.iter().all(|&pid| pid == 0xE7));
}

#[test]
fn pid_entry_json_shape() {
    let entry = lin_pid::PidEntry::new(0x27).unwrap();
    let json = serde_json::to_string(&entry).unwrap();
    assert_eq!(json, r#"{"id":39,"pid":231}"#);
}
