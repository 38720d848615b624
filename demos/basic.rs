use tinyring::{Queue, Stack};

// Element type can be arbitrary
#[derive(Clone, Copy, Debug)]
struct Sample {
    a: i32,
    b: i32,
}

fn main() {
    let a = Sample { a: 1, b: 2 };
    let b = Sample { a: 3, b: 4 };
    let c = Sample { a: 5, b: 6 };

    let mut queue: Queue<Sample, 3> = Queue::new();

    println!("Capacity: {}", queue.capacity());

    println!("------------FIFO------------");
    queue.push(a).unwrap();
    queue.push(b).unwrap();
    queue.push(c).unwrap();

    if let Err(err) = queue.push(a) {
        println!("Buffer full, push fails: {}", err);
    }

    // overwrite the oldest elements
    queue.force_push(b);
    queue.force_push(b);
    queue.force_push(b);
    println!("Element count: {}", queue.size());
    println!("Remaining capacity: {}", queue.remaining());

    while let Ok(value) = queue.pop() {
        println!("Value: {{{}, {}}}", value.a, value.b);
    }

    queue.push(a).unwrap();
    queue.flush();

    if let Err(err) = queue.pop() {
        println!("Buffer empty, pop fails: {}", err);
    }
    println!("Element count: {}", queue.size());
    println!("Remaining space: {}", queue.remaining());

    println!("------------LIFO------------");
    let mut stack: Stack<Sample, 3> = Stack::new();

    stack.push(a).unwrap();
    stack.push(b).unwrap();
    stack.push(c).unwrap();
    if let Err(err) = stack.push(a) {
        println!("Buffer full, push fails: {}", err);
    }

    while let Ok(value) = stack.pop() {
        println!("Value: {{{}, {}}}", value.a, value.b);
    }

    if let Err(err) = stack.pop() {
        println!("Buffer empty, pop fails: {}", err);
    }
}
