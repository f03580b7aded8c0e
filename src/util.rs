use crate::node::Node;

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Height of a possibly empty subtree, in edges. An empty subtree has a height
/// of -1 so that a leaf has a height of 0.
///
/// This walks the subtree one level at a time so degenerate trees don't
/// recurse once per node.
pub(crate) fn height<T>(root: Option<&Node<T>>) -> isize {
    let mut level: Vec<&Node<T>> = root.into_iter().collect();
    let mut height = -1;
    while !level.is_empty() {
        height += 1;
        level = level.into_iter().flat_map(Node::children).collect();
    }

    height
}

/// Builds a subtree out of the next `len` values of an ascending, duplicate
/// free iterator. The value at `len / 2` becomes the subtree root, the values
/// before it the left subtree and the values after it the right subtree.
///
/// Values are consumed in order so the recursion only goes `O(lg len)` deep.
pub(crate) fn build_sorted<T, I>(values: &mut I, len: usize) -> Link<T>
where
    I: Iterator<Item = T>,
{
    if len == 0 {
        return None;
    }

    let mid = len / 2;
    let left = build_sorted(values, mid);
    let mut node = Node::new(values.next()?);
    node.left = left;
    node.right = build_sorted(values, len - mid - 1);

    Some(Box::new(node))
}
