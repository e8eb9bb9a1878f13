//! Text rendering for the display operation

use lifo_core::DynamicStack;

/// Render the occupied slots as a two-column table, top row first and
/// marked. The empty-stack diagnostic is the caller's business.
pub fn stack_table(stack: &DynamicStack) -> String {
    let mut out = String::new();
    out.push_str("\nStack contents (top to bottom):\n");
    out.push_str("Position\tValue\n");
    out.push_str("--------\t-----\n");
    let top = stack.top_index();
    for (position, value) in stack.entries() {
        let marker = if Some(position) == top { " <- TOP" } else { "" };
        out.push_str(&format!("{position}\t\t{value}{marker}\n"));
    }
    out.push_str(&format!("Total elements: {}\n", stack.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_marks_top_and_counts() {
        let mut stack = DynamicStack::new(3);
        for item in [10, 20, 30] {
            stack.push(item).unwrap();
        }

        let table = stack_table(&stack);
        assert_eq!(
            table,
            "\nStack contents (top to bottom):\n\
             Position\tValue\n\
             --------\t-----\n\
             2\t\t30 <- TOP\n\
             1\t\t20\n\
             0\t\t10\n\
             Total elements: 3\n"
        );
    }

    #[test]
    fn test_single_element_is_both_top_and_bottom() {
        let mut stack = DynamicStack::new(1);
        stack.push(-7).unwrap();

        let table = stack_table(&stack);
        assert!(table.contains("0\t\t-7 <- TOP\n"));
        assert!(table.contains("Total elements: 1\n"));
    }
}
