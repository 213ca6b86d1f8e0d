use proptest::prelude::*;
use sf_lib::collections::contiguous::Vector;
use sf_lib::collections::contiguous::vector::MIN_CAP;

// Model operations on Vector against std's Vec, checking contents and the capacity rules.
proptest! {
    #[test]
    fn prop_vector_matches_model(ops in proptest::collection::vec((0u8..=5u8, any::<u16>(), 0usize..64), 1..200)) {
        let mut vec: Vector<u16> = Vector::new();
        let mut model: Vec<u16> = Vec::new();

        for (op, value, raw_index) in ops {
            match op {
                0 => {
                    vec.push(value);
                    model.push(value);
                }
                1 => {
                    prop_assert_eq!(vec.pop().ok(), model.pop());
                }
                2 => {
                    let index = raw_index % (model.len() + 2);
                    let result = vec.insert(index, value);
                    if index <= model.len() {
                        prop_assert!(result.is_ok());
                        model.insert(index, value);
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                3 => {
                    let index = raw_index % (model.len() + 1);
                    let result = vec.delete(index);
                    if index < model.len() {
                        prop_assert_eq!(result.ok(), Some(model.remove(index)));
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                4 => {
                    let index = raw_index % (model.len() + 1);
                    prop_assert_eq!(vec.get(index).ok(), model.get(index).copied());
                }
                5 => {
                    let values = [value; 3];
                    vec.append(&values);
                    model.extend_from_slice(&values);
                }
                _ => unreachable!(),
            }

            // Invariants after each step
            prop_assert_eq!(&*vec, model.as_slice());
            prop_assert!(vec.len() <= vec.cap());
            if vec.is_allocated() {
                prop_assert!(vec.cap() >= MIN_CAP);
            }
        }
    }

    #[test]
    fn prop_push_pop_round_trip(values in proptest::collection::vec(any::<i64>(), 0..100)) {
        let mut vec: Vector<i64> = values.iter().copied().collect();
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(vec.get(i), Ok(*value));
        }

        for value in values.iter().rev() {
            prop_assert_eq!(vec.pop(), Ok(*value));
        }
        prop_assert!(vec.pop().is_err());
    }
}
