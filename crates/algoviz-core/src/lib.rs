pub mod error;
pub mod frame;
pub mod graph;
pub mod id;
pub mod pace;
pub mod step;
pub mod tree;

// Re-export commonly used types
pub use error::CoreError;
pub use frame::{
    ArrayFrame, BoardFrame, Distance, DpFrame, DpTable, Frame, Frontier, GraphFrame, GridPos,
    MazeFrame, Rotation, SearchWindow, SubsetFrame, TreeFrame,
};
pub use graph::{Graph, GraphEdge, GraphNode, Neighbor, Position};
pub use id::{EdgeId, NodeId, RenderKey};
pub use pace::{Pace, Speed, SOLUTION_HOLD_MILLIS};
pub use step::{Emphasis, Step, StepLog};
pub use tree::{BinaryTree, TreeNode};
